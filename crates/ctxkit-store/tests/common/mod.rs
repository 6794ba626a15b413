use std::fs;
use std::path::Path;

/// Write `content` to `root/rel`, creating parent directories
#[allow(dead_code)]
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[allow(dead_code)]
pub fn write_rule(root: &Path, file: &str, id: &str) {
    write_file(
        root,
        &format!("rules/{}", file),
        &format!("---\nid: {}\nkind: rule\nversion: 1\n---\n# {}\n", id, id),
    );
}

/// Write a task spec with the given status and complexity
#[allow(dead_code)]
pub fn write_spec(root: &Path, task: &str, status: &str, complexity: &str) {
    write_file(
        root,
        &format!("tasks/{}/spec.md", task),
        &format!(
            "---\nid: {}-spec\nkind: spec\nstatus: {}\ncomplexity: {}\n---\nRequirement\n",
            task, status, complexity
        ),
    );
}

/// Write a non-spec role file
#[allow(dead_code)]
pub fn write_role(root: &Path, task: &str, role: &str) {
    write_file(
        root,
        &format!("tasks/{}/{}.md", task, role),
        &format!("---\nid: {}-{}\nkind: {}\n---\nBody\n", task, role, role),
    );
}
