//! Test helpers for writing staffing snapshots and weight profiles.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

/// A temporary directory holding CLI inputs.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write a snapshot where Ana holds the required skill and Luis does not.
    pub(super) fn write_snapshot(&self, name: &str) -> Utf8PathBuf {
        let path = self.path(name);
        let snapshot = json!({
            "role": {
                "id_rol": 4,
                "id_cliente": 12,
                "habilidades_requeridas": [
                    { "id_habilidad": 9, "nivel_requerido": 3, "peso": 2.0 }
                ]
            },
            "candidates": [
                {
                    "id_usuario": 2,
                    "nombre": "Luis",
                    "fecha_ingreso": "2023-01-01",
                    "habilidades": [{ "id_habilidad": 5, "nivel_experiencia": 4 }]
                },
                {
                    "id_usuario": 1,
                    "nombre": "Ana",
                    "fecha_ingreso": "2020-01-01",
                    "roles": [{ "id_rol": 4 }],
                    "proyectos": [{ "id_proyecto": 30, "id_cliente": 12 }],
                    "habilidades": [
                        { "id_habilidad": 9, "nivel_experiencia": 3, "fuentes": 2 },
                        { "id_habilidad": 11, "nivel_experiencia": 2, "origen": "certificacion" }
                    ]
                }
            ]
        });
        let payload = serde_json::to_vec_pretty(&snapshot).expect("serialize snapshot");
        write_utf8(&path, &payload);
        path
    }

    /// Write a weight profile that only rewards skill coverage.
    pub(super) fn write_skill_weights(&self, name: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, br#"{ "match_habilidades": 1.0 }"#);
        path
    }
}
