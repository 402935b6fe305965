pub mod analyze_cmds;

pub use analyze_cmds::{analyze_docx_cmd, analyze_docx_path};
