use abilityfx::battle::Battle;

fn log_is_diagnostic(log: &str) -> bool {
    log.starts_with("debug")
}

/// Asserts that new logs in the battle are equal to the given logs.
///
/// Diagnostic logs are ignored.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle
        .new_log_entries()
        .into_iter()
        .filter(|log| !log_is_diagnostic(log))
        .collect::<Vec<_>>();
    let want = want
        .iter()
        .filter(|log| !log_is_diagnostic(log))
        .map(|log| log.to_string())
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}
