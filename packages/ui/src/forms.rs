//! Email/password forms for signing in and creating an account.

use api::Identity;
use dioxus::prelude::*;

use crate::auth::use_session;

/// Client-side checks run before a signup request is sent.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name is required");
    }
    validate_email(email)?;
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password != confirm_password {
        return Err("Passwords do not match");
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    Ok(())
}

/// Sign-in form. Calls `on_success` once the session is established.
#[component]
pub fn LoginForm(on_success: Option<EventHandler<Identity>>) -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if let Err(msg) = validate_email(&e) {
                error.set(Some(msg.to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match session.login(&e, &p).await {
                Ok(identity) => {
                    loading.set(false);
                    password.set(String::new());
                    if let Some(handler) = on_success {
                        handler.call(identity);
                    }
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_login,
            class: "auth-form",

            if let Some(err) = error() {
                div {
                    class: "auth-form__error",
                    "{err}"
                }
            }

            input {
                class: "auth-form__input",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                class: "auth-form__input",
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                class: "auth-form__submit",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}

/// Account creation form. Calls `on_success` once the new session is established.
#[component]
pub fn SignupForm(on_success: Option<EventHandler<Identity>>) -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if let Err(msg) = validate_signup(&n, &e, &p, &cp) {
                error.set(Some(msg.to_string()));
                return;
            }

            loading.set(true);
            match session.signup(&n, &e, &p).await {
                Ok(identity) => {
                    loading.set(false);
                    if let Some(handler) = on_success {
                        handler.call(identity);
                    }
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_signup,
            class: "auth-form",

            if let Some(err) = error() {
                div {
                    class: "auth-form__error",
                    "{err}"
                }
            }

            input {
                class: "auth-form__input",
                r#type: "text",
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }

            input {
                class: "auth-form__input",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                class: "auth-form__input",
                r#type: "password",
                placeholder: "Password (min 8 characters)",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            input {
                class: "auth-form__input",
                r#type: "password",
                placeholder: "Confirm password",
                value: confirm_password(),
                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
            }

            button {
                class: "auth-form__submit",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Sign up" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_signup() {
        assert_eq!(validate_signup("Ada", "ada@example.com", "12345678", "12345678"), Ok(()));
        assert_eq!(
            validate_signup("  ", "ada@example.com", "12345678", "12345678"),
            Err("Name is required")
        );
        assert_eq!(
            validate_signup("Ada", "ada.example.com", "12345678", "12345678"),
            Err("Please enter a valid email")
        );
        assert_eq!(
            validate_signup("Ada", "ada@example.com", "short", "short"),
            Err("Password must be at least 8 characters")
        );
        assert_eq!(
            validate_signup("Ada", "ada@example.com", "12345678", "87654321"),
            Err("Passwords do not match")
        );
    }
}
