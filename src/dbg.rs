#[allow(dead_code)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub fn dbg_info() -> String {
    format!(
        "{} {} ({} build)\nTarget: {}\nCompiler: {}",
        built_info::PKG_NAME,
        built_info::PKG_VERSION,
        built_info::PROFILE,
        built_info::TARGET,
        built_info::RUSTC_VERSION,
    )
}
