use std::error::Error;

use vergen::EmitBuilder;

// Feeds `GET /v1/version`. Outside a git checkout vergen falls back to
// placeholder values instead of failing.
fn main() -> Result<(), Box<dyn Error>> {
    EmitBuilder::builder()
        .build_timestamp()
        .git_sha(false)
        .git_commit_timestamp()
        .emit()?;
    Ok(())
}
