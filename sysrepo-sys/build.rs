use std::env;
use std::path::PathBuf;

fn main() {
    let dst = PathBuf::from(env::var("OUT_DIR").unwrap());
    let out_file = dst.join("sysrepo.rs");

    #[cfg(feature = "bindgen")]
    {
        // Generate Rust FFI to sysrepo. libyang types are provided by
        // libyang3-sys, so only the sysrepo API is generated here.
        println!("cargo:rerun-if-changed=wrapper.h");
        let bindings = bindgen::Builder::default()
            .header("wrapper.h")
            .derive_default(true)
            .default_enum_style(bindgen::EnumVariation::ModuleConsts)
            .allowlist_function("sr_.*")
            .allowlist_type("sr_.*")
            .allowlist_var("SR_.*")
            .allowlist_type("timespec")
            .allowlist_recursively(false)
            .generate()
            .expect("Unable to generate sysrepo bindings");
        bindings
            .write_to_file(out_file)
            .expect("Couldn't write sysrepo bindings!");
    }
    #[cfg(not(feature = "bindgen"))]
    {
        let mut pregen_bindings = PathBuf::new();
        pregen_bindings.push(env::var("CARGO_MANIFEST_DIR").unwrap());
        pregen_bindings.push("pre-generated-bindings");
        pregen_bindings.push("sysrepo-3.rs");

        std::fs::copy(&pregen_bindings, &out_file)
            .expect("Unable to copy pre-generated sysrepo bindings");
        println!("cargo:rerun-if-changed=pre-generated-bindings");
    }

    if let Err(e) = pkg_config::Config::new().probe("sysrepo") {
        println!(
            "cargo:warning=failed to find sysrepo library with pkg-config: {}",
            e
        );
        println!("cargo:warning=attempting to link without pkg-config");
        println!("cargo:rustc-link-lib=sysrepo");
    }
}
