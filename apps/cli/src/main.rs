use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{
    load_settings, submit_order, Field, FieldValue, HttpOrderClient, OrderBanner, OrderForm,
};
use shared::domain::{topping_by_name, TOPPINGS};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Place a pizza order from the command line")]
struct Args {
    #[arg(long)]
    full_name: String,
    /// S, M or L.
    #[arg(long, default_value = "")]
    size: String,
    /// Topping display name; repeat for several.
    #[arg(long = "topping")]
    toppings: Vec<String>,
    #[arg(long)]
    order_url: Option<String>,
}

/// Resolves a `--topping` value; only topping display names are accepted.
fn topping_field(name: &str) -> Result<Field> {
    let topping = topping_by_name(name).with_context(|| {
        let known: Vec<&str> = TOPPINGS.iter().map(|t| t.name).collect();
        format!("known toppings: {}", known.join(", "))
    })?;
    Ok(Field::Topping(topping.id))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let settings = load_settings()?.with_order_url(args.order_url);
    settings.validate()?;
    tracing::debug!(order_url = %settings.order_url, "loaded client settings");
    let client = HttpOrderClient::from_settings(&settings)?;

    let mut form = OrderForm::new();
    form.set_full_name(args.full_name);
    form.set_size(args.size);
    for name in &args.toppings {
        form.input_change(topping_field(name)?, FieldValue::Flag(true))?;
    }

    if form.disabled() {
        for field in [Field::FullName, Field::Size] {
            let message = form.errors().get(field);
            if !message.is_empty() {
                eprintln!("{field}: {message}");
            }
        }
        bail!("order form is not valid");
    }

    let pending = submit_order(&mut form, &client).await?;
    println!(
        "Submitted order: {}",
        serde_json::to_string(&pending.payload)?
    );

    match form.banner() {
        Some(OrderBanner::Success(message)) => {
            println!("{message}");
            Ok(())
        }
        Some(banner) => bail!("{}", banner.text()),
        None => bail!("order submission did not settle"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::ToppingId;

    #[test]
    fn topping_flag_resolves_display_names() {
        assert_eq!(
            topping_field("Green Peppers").expect("known topping"),
            Field::Topping(ToppingId(2))
        );
    }

    #[test]
    fn topping_flag_rejects_other_form_fields() {
        for name in ["size", "fullName", "Anchovies"] {
            let err = topping_field(name).expect_err("not a topping");
            assert!(
                err.to_string().starts_with("known toppings:"),
                "unexpected error for {name:?}: {err}"
            );
        }
    }
}
