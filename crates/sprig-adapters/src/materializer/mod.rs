//! Template materializers: turn a reference into a readable local directory.

mod git_remote;
mod local_dir;
mod source;

pub use git_remote::GitRemoteMaterializer;
pub use local_dir::LocalDirMaterializer;
pub use source::SourceMaterializer;
