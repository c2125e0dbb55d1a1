//! Static French/English string tables. Selection is per-run; nothing is
//! persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
        }
    }

    pub fn table(self) -> &'static Translations {
        match self {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }
}

pub struct Translations {
    pub app_title: &'static str,
    pub about_blurb: &'static str,
    pub sign_in_blurb: &'static str,
    pub sign_in_button: &'static str,
    pub continue_button: &'static str,
    pub sign_in_hint: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub fetch_button: &'static str,
    pub last_message_label: &'static str,
    pub generated_response_label: &'static str,
    pub draft_placeholder: &'static str,
    pub send_button: &'static str,
    pub copy_button: &'static str,
    pub logout_button: &'static str,
    pub loading_notice: &'static str,
    pub empty_email_warning: &'static str,
    pub empty_body_warning: &'static str,
    pub sent_notice: &'static str,
    pub copied_notice: &'static str,
    pub fetched_notice: &'static str,
    pub session_expired_notice: &'static str,
    pub browser_opened_notice: &'static str,
    pub browser_open_failed: &'static str,
}

pub const FR: Translations = Translations {
    app_title: "Assistant Gmail",
    about_blurb: "Un assistant intelligent pour Gmail : récupérez le dernier message reçu, laissez l'IA rédiger une réponse, relisez-la puis envoyez-la.",
    sign_in_blurb: "Connectez-vous avec votre compte Google pour accéder à l'application.",
    sign_in_button: "Se connecter avec Google",
    continue_button: "Continuer vers l'assistant",
    sign_in_hint: "La connexion s'effectue dans votre navigateur. Revenez ici une fois terminée.",
    email_label: "Adresse e-mail",
    email_placeholder: "nom@exemple.com",
    fetch_button: "Récupérer le dernier message",
    last_message_label: "Dernier message",
    generated_response_label: "Réponse générée",
    draft_placeholder: "Modifiez la réponse avant l'envoi…",
    send_button: "Envoyer la réponse",
    copy_button: "Copier",
    logout_button: "Déconnexion",
    loading_notice: "Chargement…",
    empty_email_warning: "Veuillez saisir une adresse e-mail.",
    empty_body_warning: "La réponse est vide ; rien à envoyer.",
    sent_notice: "E-mail envoyé avec succès.",
    copied_notice: "Réponse copiée dans le presse-papiers.",
    fetched_notice: "Message récupéré à",
    session_expired_notice: "Session expirée ou identifiants invalides. Veuillez vous reconnecter.",
    browser_opened_notice: "Navigateur ouvert ; terminez l'opération puis revenez ici.",
    browser_open_failed: "Impossible d'ouvrir le navigateur",
};

pub const EN: Translations = Translations {
    app_title: "Gmail Assistant",
    about_blurb: "A smart Gmail assistant: fetch the latest message, let the AI draft a reply, review it, then send it.",
    sign_in_blurb: "Sign in with your Google account to access the application.",
    sign_in_button: "Sign in with Google",
    continue_button: "Continue to the assistant",
    sign_in_hint: "Sign-in happens in your browser. Come back here once it is done.",
    email_label: "Email address",
    email_placeholder: "name@example.com",
    fetch_button: "Fetch last message",
    last_message_label: "Last message",
    generated_response_label: "Generated response",
    draft_placeholder: "Edit the reply before sending…",
    send_button: "Send reply",
    copy_button: "Copy",
    logout_button: "Log out",
    loading_notice: "Loading…",
    empty_email_warning: "Please enter an email address.",
    empty_body_warning: "The reply is empty; nothing to send.",
    sent_notice: "Email sent successfully.",
    copied_notice: "Reply copied to the clipboard.",
    fetched_notice: "Message fetched at",
    session_expired_notice: "Session expired or invalid credentials. Please sign in again.",
    browser_opened_notice: "Browser opened; finish there, then come back.",
    browser_open_failed: "Failed to open the browser",
};
