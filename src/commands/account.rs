use carelink_app::controllers::AuthFlow;
use carelink_core::models::{auth::RegisterRequest, session::Role};
use eyre::{Result, eyre};

use super::{Shell, loaded};
use crate::cli::AccountCommand;

pub async fn run(command: AccountCommand, shell: &Shell<'_>) -> Result<()> {
    let auth = AuthFlow::new(shell.ctx, shell.notifier);
    match command {
        AccountCommand::Register {
            role,
            name,
            email,
            phone,
            password,
        } => {
            let request = RegisterRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                phone: phone.trim().to_string(),
                password,
            };
            let email = loaded(auth.register(role.into(), &request).await?)?;
            println!("Enter the code sent to {email} with `carelink verify-otp`");
        }
        AccountCommand::VerifyOtp { role, email, code } => match Role::from(role) {
            Role::User => {
                let session = loaded(auth.verify_user_otp(&email, &code).await?)?;
                println!("Signed in as {}", session.name);
            }
            Role::ServiceProvider => {
                let session = loaded(auth.verify_provider_otp(&email, &code).await?)?;
                println!("Signed in as {}", session.name);
                if !session.has_completed_details {
                    println!("Submit your professional details with `carelink provider details`");
                }
            }
            Role::Admin => return Err(eyre!("Admin accounts are not verified by email")),
        },
        AccountCommand::ResendOtp { role, email } => {
            super::done(auth.resend_otp(role.into(), &email).await?)?;
        }
        AccountCommand::Login {
            role,
            email,
            password,
        } => match Role::from(role) {
            Role::User => {
                loaded(auth.login_user(&email, &password).await?)?;
            }
            Role::ServiceProvider => {
                let session = loaded(auth.login_provider(&email, &password).await?)?;
                if !session.is_approved {
                    println!("Your account is waiting for admin approval");
                }
            }
            Role::Admin => {
                loaded(auth.login_admin(&email, &password).await?)?;
            }
        },
        AccountCommand::Logout { role } => auth.logout(role.into()).await?,
        AccountCommand::Whoami => whoami(shell),
    }
    Ok(())
}

fn whoami(shell: &Shell<'_>) {
    let sessions = &shell.ctx.sessions;
    if sessions.active_roles().is_empty() {
        println!("Not signed in");
        return;
    }
    if let Some(user) = sessions.user.current() {
        println!("user:             {} <{}>", user.name, user.email);
    }
    if let Some(provider) = sessions.provider.current() {
        let approval = if provider.is_approved { "approved" } else { "pending approval" };
        println!("service provider: {} <{}> ({approval})", provider.name, provider.email);
    }
    if let Some(admin) = sessions.admin.current() {
        println!("admin:            {}", admin.email);
    }
}
