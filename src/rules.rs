//! The fixed target path and replacement rules for the QuickLauncher
//! view-model fix.
//!
//! The pattern blocks are opaque literals tied to the target file's exact
//! current formatting, trailing whitespace included. Do not reflow them.

use crate::patcher::ReplacementRule;

/// The one file this tool reads and conditionally rewrites.
pub const TARGET_FILE: &str =
    r"C:\git\lapriselemay_solution#1\QuickLauncher\ViewModels\LauncherViewModel.cs";

/// Notification-message switch in ExecuteActionOnResult, before the fix.
const OLD_NOTIFICATION_BLOCK: &str = r#"            var message = action.ActionType switch
            {
                FileActionType.CopyUrl => "URL copiée",
                FileActionType.Delete => "Envoyé à la corbeille",
                _ => null
            };"#;

/// Same switch with emoji prefixes and arms for the newer action types.
const NEW_NOTIFICATION_BLOCK: &str = r#"            var message = action.ActionType switch
            {
                FileActionType.CopyUrl => "🔗 URL copiée",
                FileActionType.CopyPath => "📋 Chemin copié",
                FileActionType.CopyName => "📋 Nom copié",
                FileActionType.Compress => "🗜️ Archive ZIP créée",
                FileActionType.SendByEmail => "📧 Email en cours...",
                FileActionType.Delete => "🗑️ Envoyé à la corbeille",
                _ => null
            };"#;

/// Close-after-action condition, before the fix. The lines for `Open` and
/// `RunAsAdmin` carry a trailing space in the target file; the blank line
/// before `ShowActionsPanel` is eight spaces. Both are load-bearing.
const OLD_CLOSE_BLOCK: &str = r#"            // Fermer après certaines actions
            if (action.ActionType is FileActionType.Open 
                or FileActionType.RunAsAdmin 
                or FileActionType.OpenPrivate)
            {
                _indexingService.RecordUsage(result);
                RequestHide?.Invoke(this, EventArgs.Empty);
            }
        }
        
        ShowActionsPanel = false;
    }"#;

/// Same condition extended to every action that opens something, plus an
/// else branch reporting a missing VS Code install.
const NEW_CLOSE_BLOCK: &str = r#"            // Fermer après les actions qui ouvrent quelque chose
            if (action.ActionType is FileActionType.Open 
                or FileActionType.RunAsAdmin 
                or FileActionType.OpenPrivate
                or FileActionType.OpenWith
                or FileActionType.OpenLocation
                or FileActionType.OpenInTerminal
                or FileActionType.OpenInExplorer
                or FileActionType.OpenInVSCode
                or FileActionType.EditInEditor
                or FileActionType.SendByEmail)
            {
                _indexingService.RecordUsage(result);
                RequestHide?.Invoke(this, EventArgs.Empty);
            }
        }
        else
        {
            if (action.ActionType == FileActionType.OpenInVSCode)
                ShowNotification?.Invoke(this, "❌ VS Code introuvable");
        }
        
        ShowActionsPanel = false;
    }"#;

/// The fixed, ordered rule list. Each rule operates on the output of the
/// previous one; these two touch disjoint blocks, so the final text happens
/// to be order-independent as well.
pub fn builtin_rules() -> Vec<ReplacementRule> {
    vec![
        ReplacementRule::new(
            "notification-messages",
            OLD_NOTIFICATION_BLOCK,
            NEW_NOTIFICATION_BLOCK,
        ),
        ReplacementRule::new("close-after-action", OLD_CLOSE_BLOCK, NEW_CLOSE_BLOCK),
    ]
}
