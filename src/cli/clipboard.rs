use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

/// Put `password` on the system clipboard.
pub fn copy(password: &str) -> anyhow::Result<()> {
    let mut ctx =
        ClipboardContext::new().map_err(|e| anyhow::anyhow!("clipboard unavailable: {e}"))?;
    ctx.set_contents(password.to_string())
        .map_err(|e| anyhow::anyhow!("clipboard error: {e}"))?;

    // Reading back forces some providers to take ownership before we exit.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
