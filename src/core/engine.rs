use crate::core::catalog::load_catalog;
use crate::core::form::OrderForm;
use crate::domain::model::{FragranceOption, Notification};
use crate::domain::ports::{CatalogSource, OrderGateway};
use crate::utils::error::{OrderError, Result};

/// One order as entered on the command line, before it has been checked
/// against the catalog.
#[derive(Debug, Clone)]
pub struct OrderInput {
    pub first_name: String,
    pub last_name: String,
    pub quantity: u32,
    pub fragrances: Vec<String>,
}

/// Drives one order through the whole workflow: load the catalog, apply the
/// entered fields, submit, and report the resulting notification.
pub struct OrderEngine<S: CatalogSource, G: OrderGateway> {
    catalog_source: S,
    gateway: G,
}

impl<S: CatalogSource, G: OrderGateway> OrderEngine<S, G> {
    pub fn new(catalog_source: S, gateway: G) -> Self {
        Self {
            catalog_source,
            gateway,
        }
    }

    pub async fn run(&self, input: OrderInput) -> Result<Notification> {
        println!("Loading fragrance catalog...");
        let catalog = load_catalog(&self.catalog_source).await;
        println!("Loaded {} fragrances", catalog.len());

        let selection = resolve_selection(&catalog, &input.fragrances)?;

        let mut form = OrderForm::new(catalog);
        form.set_first_name(input.first_name);
        form.set_last_name(input.last_name);
        form.set_quantity(input.quantity);

        if !form.set_selection(selection) {
            return notification_of(&form);
        }

        println!("Submitting order...");
        let outcome = form.submit(&self.gateway).await;
        tracing::info!("submission outcome: {:?}", outcome);

        notification_of(&form)
    }
}

// Requested names must resolve against the loaded catalog; the form only
// accepts options that exist there.
fn resolve_selection(
    catalog: &[FragranceOption],
    names: &[String],
) -> Result<Vec<FragranceOption>> {
    names
        .iter()
        .map(|name| {
            catalog
                .iter()
                .find(|option| option.name == *name)
                .cloned()
                .ok_or_else(|| OrderError::ValidationError {
                    message: format!("Unknown fragrance: {}", name),
                })
        })
        .collect()
}

fn notification_of(form: &OrderForm) -> Result<Notification> {
    form.notification()
        .cloned()
        .ok_or_else(|| OrderError::ProcessingError {
            message: "workflow finished without a notification".to_string(),
        })
}
