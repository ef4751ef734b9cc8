// --- File: crates/services/bookagame_cli/src/commands/account.rs ---
use bookagame_booking::{LoginForm, ProfileForm, RegisterForm};
use bookagame_common::models::User;
use bookagame_common::BookingError;

use crate::app_context::AppContext;
use crate::cli::RegisterArgs;
use crate::output::print_json;

fn print_user(user: &User, json: bool) -> Result<(), BookingError> {
    if json {
        return print_json(user);
    }
    println!("{} <{}>", user.name, user.email);
    println!("role: {:?}", user.role);
    if let Some(phone) = &user.phone {
        println!("phone: {}", phone);
    }
    Ok(())
}

pub async fn login(ctx: &AppContext, email: String, password: String, json: bool) -> Result<(), BookingError> {
    let request = LoginForm { email, password }.validate()?;
    let user = ctx.session.login(&request).await?;
    if !json {
        println!("Signed in");
    }
    print_user(&user, json)
}

pub async fn logout(ctx: &AppContext) -> Result<(), BookingError> {
    ctx.session.logout().await?;
    println!("Signed out");
    Ok(())
}

pub async fn register(ctx: &AppContext, args: RegisterArgs) -> Result<(), BookingError> {
    let form = RegisterForm {
        confirm_password: args.confirm_password.unwrap_or_else(|| args.password.clone()),
        name: args.name,
        email: args.email,
        phone: args.phone,
        password: args.password,
    };
    let request = form.validate()?;
    if args.owner {
        ctx.session.register_owner(&request).await?;
    } else {
        ctx.session.register_user(&request).await?;
    }
    println!("Account created. Sign in with `bookagame login {}`.", request.email);
    Ok(())
}

pub async fn me(ctx: &AppContext, json: bool) -> Result<(), BookingError> {
    let user = ctx.require_user().await?;
    print_user(&user, json)
}

pub async fn update_profile(ctx: &AppContext, name: String, phone: String, json: bool) -> Result<(), BookingError> {
    ctx.require_user().await?;
    let request = ProfileForm { name, phone }.validate()?;
    let user = ctx.session.update_profile(&request).await?;
    if !json {
        println!("Profile updated");
    }
    print_user(&user, json)
}
