use std::fs;
use std::path::Path;

const FRONTEND_DIST: &str = "../frontend/dist";
const EMBED_DIR: &str = "static";

fn main() {
    println!("cargo:rerun-if-changed={}", FRONTEND_DIST);

    let dist_dir = Path::new(FRONTEND_DIST);
    if !dist_dir.is_dir() {
        println!(
            "cargo:warning={} not found; embedding the placeholder page from {}/dist. Run `trunk build` in frontend/ first.",
            FRONTEND_DIST, EMBED_DIR
        );
        return;
    }

    let out_dir = Path::new(EMBED_DIR);
    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).expect("create static dir");
    let options = fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true);
    fs_extra::dir::copy(dist_dir, out_dir, &options).expect("copy frontend dist");
}
