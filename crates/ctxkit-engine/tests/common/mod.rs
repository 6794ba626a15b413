use std::fs;
use std::path::{Path, PathBuf};

use ctxkit_core::config::Config;
use ctxkit_engine::Workspace;
use tempfile::TempDir;

/// Content tree in a temp dir with a `.ctxkit/` state dir beside it
pub struct Fixture {
    pub temp: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".ctxkit")).unwrap();
        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(self.root(), self.root().join(".ctxkit"), Config::default())
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.path(rel)).unwrap();
    }

    pub fn rule(&self, file: &str, id: &str, body: &str) {
        self.write(
            &format!("rules/{}", file),
            &format!("---\nid: {}\nkind: rule\nversion: 1\n---\n{}\n", id, body),
        );
    }

    pub fn spec(&self, task: &str, status: &str, complexity: &str, references: &[&str]) {
        let refs = if references.is_empty() {
            String::new()
        } else {
            format!("references: [{}]\n", references.join(", "))
        };
        self.write(
            &format!("tasks/{}/spec.md", task),
            &format!(
                "---\nid: {}-spec\nkind: spec\nstatus: {}\ncomplexity: {}\n{}---\nRequirement\n",
                task, status, complexity, refs
            ),
        );
    }

    pub fn role(&self, task: &str, role: &str, body: &str) {
        self.write(
            &format!("tasks/{}/{}.md", task, role),
            &format!("---\nid: {}-{}\nkind: {}\n---\n{}\n", task, role, role, body),
        );
    }

    /// A complete trivial task
    pub fn trivial_task(&self, task: &str, status: &str) {
        self.spec(task, status, "trivial", &[]);
        self.role(task, "implementation", "Done");
    }
}
