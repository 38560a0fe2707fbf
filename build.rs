use chrono::Datelike;

const RELAY_VARS: [&str; 3] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
];

fn main() {
    // Year shown in the footer
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Relay ids are baked into the WASM bundle; missing ones become empty
    // strings and surface as a relay error when the form is submitted.
    for var in RELAY_VARS {
        let value = std::env::var(var).unwrap_or_default();
        if value.is_empty() {
            println!("cargo:warning={} is not set, the contact form won't deliver", var);
        }
        println!("cargo:rustc-env={}={}", var, value);
        println!("cargo:rerun-if-env-changed={}", var);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
