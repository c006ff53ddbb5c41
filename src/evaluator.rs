//! Password evaluator - entry points used by the input field.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::check::PasswordCheck;
use crate::policy::Policy;

/// Checks a password against the rule catalog with the default policy.
///
/// # Arguments
/// * `password` - The password to check
///
/// # Returns
/// A `PasswordCheck` with the satisfied rules and the derived strength.
pub fn check_password(password: &SecretString) -> PasswordCheck {
    Policy::default().check(password)
}

/// Debounced check that sends the result via channel.
///
/// Waits for the policy's debounce first. If `token` is cancelled before
/// that, typically because a newer keystroke started its own check, nothing
/// is evaluated or sent.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    password: &SecretString,
    policy: &Policy,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordCheck>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password check superseded before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(policy.debounce()) => {}
    }

    let check = policy.check(password);

    if let Err(e) = tx.send(check).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::strength::StrengthOption;
    use std::time::Duration;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        check_password_tx(&secret("SomePassword123!"), &Policy::default(), token, tx).await;

        // Sender dropped without sending.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        check_password_tx(&secret("TestPass123!"), &Policy::default(), token, tx).await;

        let check = rx.recv().await.expect("Should receive check");
        assert_eq!(check.satisfied.len(), 6);
        assert_eq!(check.strength, StrengthOption::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let policy = Policy::default().with_debounce(Duration::from_millis(500));

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        check_password_tx(&secret("TestPass123!"), &policy, token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_is_not_fatal() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        check_password_tx(&secret("a"), &Policy::default(), CancellationToken::new(), tx).await;
    }
}
