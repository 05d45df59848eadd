#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let mut f = fs::File::create(path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
}

/// A pyproject with one contract per entry of `contracts`.
pub fn pyproject(contracts: &[&[&str]]) -> String {
    let mut s = String::from(
        "[project]\nname = \"demo\"\n\n[tool.importlinter]\nroot_packages = [\"web\", \"db\"]\n",
    );
    for (i, rules) in contracts.iter().enumerate() {
        let list: Vec<String> = rules.iter().map(|r| format!("{r:?}")).collect();
        s.push_str(&format!(
            "\n[[tool.importlinter.contracts]]\nname = \"contract {i}\"\ntype = \"layers\"\n\
             layers = [\"web\", \"db\"]\nignore_imports = [{}]\n",
            list.join(", ")
        ));
    }
    s
}
