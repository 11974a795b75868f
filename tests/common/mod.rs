use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const FIXTURE: &str = include_str!("../fixtures/mixed.bib");

pub struct Workdir {
    tmp: TempDir,
}

impl Workdir {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.tmp.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let p = self.path(name);
        fs::write(&p, contents).expect("write input");
        p
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output")
}
