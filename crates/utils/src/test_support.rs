use apibump_core::ProjectRoot;
use std::path::Path;
use tempfile::TempDir;

pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

pub fn read_file(root: &ProjectRoot, relative: &str) -> String {
    std::fs::read_to_string(root.join(Path::new(relative))).unwrap()
}

/// Temporary project holding `Foo.cls` at 58.0, `Bar.trigger` at 60.0 and an undeclared class
pub fn sample_project() -> (TempDir, ProjectRoot) {
    let temp_dir = TempDir::new().unwrap();
    let base = "force-app/main/default";
    write_file(
        temp_dir.path(),
        &format!("{base}/classes/Foo.cls"),
        "// apiVersion = 58.0\npublic with sharing class Foo {}\n",
    );
    write_file(
        temp_dir.path(),
        &format!("{base}/classes/Plain.cls"),
        "public class Plain {}\n",
    );
    write_file(
        temp_dir.path(),
        &format!("{base}/triggers/Bar.trigger"),
        "// apiVersion = 60.0\ntrigger Bar on Account (before insert) {}\n",
    );
    write_file(
        temp_dir.path(),
        &format!("{base}/lwc/card/card.js"),
        "// apiVersion = 52.0\nexport default class Card {}\n",
    );
    let root = ProjectRoot::new(temp_dir.path()).unwrap();
    (temp_dir, root)
}
