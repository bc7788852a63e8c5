use std::env::consts::EXE_SUFFIX;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use anyhow::Result;
use mintcheck_client::CheckConfig;
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub checks: Vec<Check>,
}

impl fmt::Display for DoctorOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.checks {
            let mark = if c.ok { "ok" } else { "missing" };
            writeln!(f, "{:<8} {} ({})", mark, c.name, c.detail)?;
        }
        write!(f, "{}", if self.ok { "ready" } else { "not ready" })
    }
}

pub fn run(cfg: &CheckConfig) -> Result<()> {
    let program = &cfg.tool.program;
    let checks = vec![Check {
        name: program.clone(),
        ok: tool_found(program),
        detail: "required to fetch account state".to_string(),
    }];

    let ok = checks.iter().all(|c| c.ok);
    output::print(&DoctorOut { ok, checks })?;
    Ok(())
}

/// Paths are checked directly, bare names are searched on `PATH`.
fn tool_found(program: &str) -> bool {
    let direct = Path::new(program);
    if direct.components().count() > 1 {
        return direct.is_file();
    }
    std::env::var_os("PATH").is_some_and(|path| found_on(&path, program))
}

fn found_on(path: &OsStr, program: &str) -> bool {
    let with_suffix = format!("{program}{EXE_SUFFIX}");
    std::env::split_paths(path).any(|dir| dir.join(program).is_file() || dir.join(&with_suffix).is_file())
}
