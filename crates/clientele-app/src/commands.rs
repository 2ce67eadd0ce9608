//! Customer commands

use clap::Subcommand;
use clientele_domain::{Customer, CustomerId, CustomerStore, StoreError};
use clientele_usecase::CustomerGateway;
use serde::Serialize;

/// One gateway operation, as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CustomerCommand {
    /// List every customer
    List,
    /// Show one customer
    Get { id: i64 },
    /// Create a customer
    Create { name: String },
    /// Rename a customer
    Update { id: i64, name: String },
    /// Delete a customer
    Delete { id: i64 },
}

impl CustomerCommand {
    pub async fn execute<S: CustomerStore>(
        &self,
        gateway: &CustomerGateway<S>,
    ) -> Result<CommandOutput, StoreError> {
        let output = match self {
            CustomerCommand::List => CommandOutput::Customers(gateway.list_all().await?),
            CustomerCommand::Get { id } => match gateway.get_by_id(CustomerId::new(*id)).await? {
                Some(customer) => CommandOutput::Customer(customer),
                None => CommandOutput::Absent,
            },
            CustomerCommand::Create { name } => {
                CommandOutput::Customer(gateway.create(name.as_str()).await?)
            }
            CustomerCommand::Update { id, name } => CommandOutput::Customer(
                gateway.update(CustomerId::new(*id), name.as_str()).await?,
            ),
            CustomerCommand::Delete { id } => {
                CommandOutput::Customer(gateway.delete(CustomerId::new(*id)).await?)
            }
        };
        Ok(output)
    }
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Customers(Vec<Customer>),
    Customer(Customer),
    /// Lookup found nothing
    Absent,
}

#[derive(Serialize)]
struct CustomerView<'a> {
    id: i64,
    name: &'a str,
}

impl<'a> From<&'a Customer> for CustomerView<'a> {
    fn from(customer: &'a Customer) -> Self {
        Self {
            id: customer.id().value(),
            name: customer.name(),
        }
    }
}

impl CommandOutput {
    pub fn is_absent(&self) -> bool {
        matches!(self, CommandOutput::Absent)
    }

    /// `id<TAB>name` lines, or JSON when `json` is set
    pub fn render(&self, json: bool) -> serde_json::Result<String> {
        if json {
            return match self {
                CommandOutput::Customers(customers) => serde_json::to_string_pretty(
                    &customers.iter().map(CustomerView::from).collect::<Vec<_>>(),
                ),
                CommandOutput::Customer(customer) => {
                    serde_json::to_string_pretty(&CustomerView::from(customer))
                }
                CommandOutput::Absent => Ok("null".to_string()),
            };
        }

        Ok(match self {
            CommandOutput::Customers(customers) => customers
                .iter()
                .map(plain_line)
                .collect::<Vec<_>>()
                .join("\n"),
            CommandOutput::Customer(customer) => plain_line(customer),
            CommandOutput::Absent => String::new(),
        })
    }
}

fn plain_line(customer: &Customer) -> String {
    format!("{}\t{}", customer.id(), customer.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientele_adapter::InMemoryCustomerStore;

    fn gateway() -> CustomerGateway<InMemoryCustomerStore> {
        let store = InMemoryCustomerStore::with_customers([
            Customer::new(CustomerId::new(1), "John Doe"),
            Customer::new(CustomerId::new(2), "Jane Doe"),
        ])
        .unwrap();
        CustomerGateway::new(store)
    }

    #[tokio::test]
    async fn test_get_missing_is_absent() {
        let output = CustomerCommand::Get { id: 3 }
            .execute(&gateway())
            .await
            .unwrap();

        assert!(output.is_absent());
        assert_eq!(output.render(false).unwrap(), "");
        assert_eq!(output.render(true).unwrap(), "null");
    }

    #[tokio::test]
    async fn test_update_then_list() {
        let gateway = gateway();

        CustomerCommand::Update {
            id: 1,
            name: "James Doe".to_string(),
        }
        .execute(&gateway)
        .await
        .unwrap();

        let output = CustomerCommand::List.execute(&gateway).await.unwrap();
        assert_eq!(output.render(false).unwrap(), "1\tJames Doe\n2\tJane Doe");
    }

    #[tokio::test]
    async fn test_delete_missing_is_store_error() {
        let err = CustomerCommand::Delete { id: 7 }
            .execute(&gateway())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::NotFound {
                id: CustomerId::new(7)
            }
        );
    }

    #[test]
    fn test_render_json() {
        let output = CommandOutput::Customer(Customer::new(CustomerId::new(3), "Alice Doe"));

        let value: serde_json::Value =
            serde_json::from_str(&output.render(true).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "id": 3, "name": "Alice Doe" }));
    }
}
