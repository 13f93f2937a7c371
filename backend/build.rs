use std::fs;
use std::path::Path;

const PANEL_DIST: &str = "../frontend/dist";
const EMBED_ROOT: &str = "static";

/// Refreshes `static/dist` from the trunk output when there is one.
/// The directory always exists so that `include_dir!` expands.
fn main() {
    println!("cargo:rerun-if-changed={}", PANEL_DIST);

    let source = Path::new(PANEL_DIST);
    let target = Path::new(EMBED_ROOT);

    if source.is_dir() {
        let _ = fs::remove_dir_all(target);
        fs::create_dir_all(target).expect("create static/");
        let options = fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true);
        fs_extra::dir::copy(source, target, &options).expect("copy the panel build");
    } else {
        println!("cargo:warning=no panel build at {}, embedding an empty directory", PANEL_DIST);
    }
    fs::create_dir_all(target.join("dist")).expect("create static/dist");
}
