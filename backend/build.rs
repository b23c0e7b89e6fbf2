use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir.join("dist")).unwrap();

    if dist_dir.exists() {
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    } else {
        // Placeholder so the embedded directory exists before the first
        // frontend build.
        fs::write(
            out_dir.join("dist").join("index.html"),
            "<!doctype html><html><body>Frontend bundle has not been built.</body></html>",
        )
            .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
