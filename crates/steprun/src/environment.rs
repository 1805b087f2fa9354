use std::io::IsTerminal;

const NO_PAUSE_VAR: &str = "STEPRUN_NO_PAUSE";
const FORCE_PAUSE_VAR: &str = "STEPRUN_FORCE_PAUSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoPauseReason {
    Flag,
    ExplicitDisable,
    CiDetected { env_var: String },
    NoTerminal,
}

/// Why the acknowledgment pause should be skipped, if it should.
pub fn no_pause_reason(flag: bool) -> Option<NoPauseReason> {
    if flag {
        return Some(NoPauseReason::Flag);
    }

    if std::env::var(NO_PAUSE_VAR).is_ok() {
        return Some(NoPauseReason::ExplicitDisable);
    }

    if std::env::var(FORCE_PAUSE_VAR).is_ok() {
        return None;
    }

    if let Some(env_var) = detect_ci_env_var() {
        return Some(NoPauseReason::CiDetected { env_var });
    }

    if !std::io::stdin().is_terminal() {
        return Some(NoPauseReason::NoTerminal);
    }

    None
}

fn detect_ci_env_var() -> Option<String> {
    const CI_ENV_VARS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
        "BUILDKITE",
        "TF_BUILD",
    ];

    CI_ENV_VARS
        .iter()
        .find(|var| std::env::var(**var).is_ok())
        .map(|var| (*var).to_string())
}
