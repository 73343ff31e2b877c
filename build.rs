use std::env;

fn main() {
    let target = env::var("TARGET").unwrap_or_default();

    // Host builds only run the hardware independent tests
    if !target.contains("avr") {
        return;
    }

    // Configure for ATtiny85
    println!("cargo:rustc-link-arg=-mmcu=attiny85");

    // Internal oscillator with CKDIV8: carrier timing assumes exactly this
    println!("cargo:rustc-env=MCU_FREQ_HZ=1000000");

    if env::var("CARGO_FEATURE_DEBUG").is_ok() {
        println!("cargo:warning=Diagnostic serial enabled on PB2");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
