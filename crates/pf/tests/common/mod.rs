use std::process::Command;

/// Create a new pf CLI command, isolated from any PF_* settings in the environment
pub fn pf() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pf"));
    for var in [
        "PF_SETTINGS",
        "PF_BREACH_API_URL",
        "PF_USER_AGENT",
        "PF_ADD_PADDING",
        "PF_TIMEOUT",
        "PF_PASSWORD",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
