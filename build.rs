use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=tailwind.config.js");
    println!("cargo:rerun-if-changed=src");

    // Run tailwindcss to generate CSS (using locally installed version)
    let output = Command::new("npx")
        .arg("tailwindcss")
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output();

    match output {
        Ok(output) => {
            if !output.status.success() {
                println!("cargo:warning=Failed to generate Tailwind CSS");
                println!(
                    "cargo:warning=STDERR: {}",
                    String::from_utf8_lossy(&output.stderr)
                );
            } else {
                println!("cargo:warning=Tailwind CSS generated successfully");
            }
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
        }
    }

    // asset!() needs the stylesheet to exist even when tailwind is unavailable
    let generated = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/tailwind.css");
    if !generated.exists() {
        if let Err(e) = std::fs::write(&generated, "") {
            println!("cargo:warning=Failed to write empty tailwind.css: {}", e);
        }
    }
}
