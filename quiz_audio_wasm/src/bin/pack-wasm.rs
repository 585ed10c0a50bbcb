//! Builds the music script and lays it out in `dist/` next to a demo page
//!
//! ```plaintext
//! cargo run -p quiz_audio_wasm --bin pack-wasm [-- --debug]
//! ```

use std::{
    env, fs,
    io::{self, Write},
    path::Path,
    process::{exit, Command, Output},
};

const WASM_LIB: &str = "quiz_audio_wasm";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
const OUTPUT_DIR: &str = "dist";
/// Static files copied verbatim from the crate directory
const STATIC_FILES: [&str; 1] = ["index.html"];

fn main() {
    let profile = match env::args().any(|arg| arg == "--debug") {
        true => "debug",
        false => "release",
    };
    let wasm_path = format!("target/{}/{}/{}.wasm", WASM_TARGET, profile, WASM_LIB);

    println!(
        "\n📦 Packaging [[ {} ]] ({}) into '{}' for serving next to the game pages\n",
        WASM_LIB, profile, OUTPUT_DIR,
    );

    let mut build = Command::new("cargo");
    build
        .arg("build")
        .args(["-p", WASM_LIB])
        .arg("--lib")
        .args(["--target", WASM_TARGET]);
    if profile == "release" {
        build.arg("--release");
    }

    let mut bindgen = Command::new("wasm-bindgen");
    bindgen
        .arg(&wasm_path)
        .args(["--out-dir", OUTPUT_DIR])
        .args(["--target", "web"])
        .arg("--no-typescript");

    for command in [&mut build, &mut bindgen] {
        run_step(command);
    }

    for file in STATIC_FILES {
        let from = Path::new(WASM_LIB).join(file);
        let to = Path::new(OUTPUT_DIR).join(file);
        if let Err(err) = fs::copy(&from, &to) {
            eprintln!("FAILURE ✖ copying {} :: {}", from.display(), err);
            exit(1);
        }
    }

    println!("\n⚡ Finished packaging into './{}'\n", OUTPUT_DIR);

    if let Ok(entries) = fs::read_dir(OUTPUT_DIR) {
        println!("-------- CONTENTS --------");
        for entry in entries.flatten() {
            println!("{}", entry.file_name().to_string_lossy());
        }
        println!("--------------------------");
    }
}

fn run_step(command: &mut Command) {
    println!("EXECUTING :: ( {:?} )", command);
    let output = match command.output() {
        Ok(output) => output,
        Err(err) => {
            eprintln!("FAILURE ✖ could not launch :: {}", err);
            exit(1);
        }
    };

    if output.status.success() {
        println!("SUCCESS ✔");
    } else {
        println!("FAILURE ✖");
        println!("---------------- FAILURE OUTPUT ----------------");
        write_all_feedback(&output);
        println!("------------------------------------------------");
        exit(1);
    }
}

fn write_all_feedback(output: &Output) {
    let _ = io::stdout().write_all(&output.stdout);
    let _ = io::stderr().write_all(&output.stderr);
}
