/// Git commit the bundle was built from, captured by `build.rs`.
pub fn git_commit_hash() -> &'static str {
    env!("KONTO_WEB_GIT_SHA")
}
