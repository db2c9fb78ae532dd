//! Shared sample-tree fixture for the loader tests.
//!
//! Layout (5 top-level files, 8 in total; 6 parse as JSON modules):
//!
//! ```text
//! sample/
//!   index.js               module
//!   c-item.service.js      module
//!   b-child.js             module
//!   readme.md              not a module
//!   data.txt               not a module
//!   services/
//!     child-2.service.js   module
//!     demo.helper.js       module
//!   nested/
//!     index.js             module
//! ```
//!
//! Suffix matching is plain `ends_with`, so both `index.js` modules match
//! the postfix `"ex.js"`; with `"service.js"` that makes exactly four
//! postfix-matching modules (`index.js`, `nested/index.js`,
//! `c-item.service.js`, `child-2.service.js`).

use std::path::Path;

pub fn sample_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    module(root, "index.js", "root-index");
    module(root, "c-item.service.js", "c-item");
    module(root, "b-child.js", "b-child");
    std::fs::write(root.join("readme.md"), "# sample modules\n").unwrap();
    std::fs::write(root.join("data.txt"), "just some text\n").unwrap();

    let services = root.join("services");
    std::fs::create_dir(&services).unwrap();
    module(&services, "child-2.service.js", "child-2");
    module(&services, "demo.helper.js", "demo");

    let nested = root.join("nested");
    std::fs::create_dir(&nested).unwrap();
    module(&nested, "index.js", "nested-index");

    dir
}

fn module(dir: &Path, name: &str, id: &str) {
    let body = format!(r#"{{ "data": {{ "name": "{id}" }} }}"#);
    std::fs::write(dir.join(name), body).unwrap();
}
