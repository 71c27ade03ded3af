//! Supplier selection and product menus.
//!
//! Domain rejections are printed and the user is prompted again; only I/O failures
//! end the loop with an error. End of input exits cleanly.

use std::io::{BufRead, Write};

use anyhow::Context;

use stockwatch_core::{DomainError, DomainResult, ProductId};
use stockwatch_inventory::{Organization, SubscribeToOrganization};
use stockwatch_parties::{Supplier, SupplierKind};

use crate::config::Config;
use crate::{render, seed};

enum Flow {
    Continue,
    Back,
    Quit,
}

pub struct Session<R, W> {
    organization: Organization,
    suppliers: Vec<Supplier>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Seed an organization and subscribe one local and one global supplier.
    pub fn from_config(config: &Config, input: R, output: W) -> DomainResult<Self> {
        let mut organization = Organization::with_rule(config.assignment_rule());
        for product in seed::products(config.seed)? {
            organization.add_product(product);
        }

        let mut suppliers = vec![
            Supplier::new("Local Supplier", SupplierKind::Local)?,
            Supplier::new("Global Supplier", SupplierKind::Global)?,
        ];
        for supplier in &mut suppliers {
            supplier.subscribe_to_organization(&mut organization);
        }

        Ok(Self {
            organization,
            suppliers,
            input,
            output,
        })
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            self.print_supplier_menu()?;
            let Some(choice) = self.read_line()? else {
                return Ok(());
            };

            let index = match choice.as_str() {
                "1" => 0,
                "2" => 1,
                "3" => return Ok(()),
                _ => {
                    writeln!(self.output, "Invalid choice")?;
                    continue;
                }
            };

            if let Flow::Quit = self.product_menu(index)? {
                return Ok(());
            }
        }
    }

    fn product_menu(&mut self, supplier: usize) -> anyhow::Result<Flow> {
        loop {
            self.print_product_menu()?;
            let Some(choice) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            let flow = match choice.as_str() {
                "1" => self.show_assigned(supplier).map(|_| Flow::Continue)?,
                "2" => self.sell(supplier)?,
                "3" => self.check_inventory().map(|_| Flow::Continue)?,
                "4" => Flow::Back,
                _ => {
                    writeln!(self.output, "Invalid choice")?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Continue => {}
                other => return Ok(other),
            }
        }
    }

    fn show_assigned(&mut self, supplier: usize) -> anyhow::Result<()> {
        let current = &self.suppliers[supplier];
        let title = format!("Products for {}", current.name());
        render::product_table(
            &mut self.output,
            &title,
            self.organization.products_for_supplier(current),
        )?;
        Ok(())
    }

    fn sell(&mut self, supplier: usize) -> anyhow::Result<Flow> {
        self.show_assigned(supplier)?;

        write!(self.output, "\nEnter Product ID to sell: ")?;
        self.output.flush()?;
        let Some(raw) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let product_id = match raw.parse::<ProductId>() {
            Ok(id) => id,
            Err(err) => return self.reject(err),
        };

        let current = &self.suppliers[supplier];
        if let Err(err) = self.organization.check_can_sell(current, product_id) {
            return self.reject(err);
        }

        write!(self.output, "Enter quantity to sell: ")?;
        self.output.flush()?;
        let Some(raw) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let Ok(quantity) = raw.parse::<i64>() else {
            writeln!(self.output, "Invalid quantity: {raw}")?;
            return Ok(Flow::Continue);
        };

        let current = &self.suppliers[supplier];
        match self.organization.sell_as(current, product_id, quantity) {
            Ok(outcome) => {
                writeln!(
                    self.output,
                    "\nSale successful! Remaining stock: {}",
                    outcome.remaining_stock
                )?;
                if outcome.notified {
                    writeln!(self.output, "\nTargeted Restock Notification")?;
                    render::received_requests(&mut self.output, current)?;
                }
                Ok(Flow::Continue)
            }
            Err(err) => self.reject(err),
        }
    }

    fn check_inventory(&mut self) -> anyhow::Result<()> {
        let report = self.organization.check_inventory_and_notify();
        render::sweep_report(&mut self.output, &report)?;
        for supplier in &self.suppliers {
            render::received_requests(&mut self.output, supplier)?;
        }
        Ok(())
    }

    fn reject(&mut self, err: DomainError) -> anyhow::Result<Flow> {
        tracing::debug!(%err, "request rejected");
        writeln!(self.output, "{err}")?;
        Ok(Flow::Continue)
    }

    fn print_supplier_menu(&mut self) -> anyhow::Result<()> {
        write!(
            self.output,
            "\nSupplier Selection\n1. Local Supplier\n2. Global Supplier\n3. Exit\n\nEnter your choice: "
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn print_product_menu(&mut self) -> anyhow::Result<()> {
        write!(
            self.output,
            "\nProduct Menu\n1. View Assigned Products\n2. Sell Product\n3. Check Inventory Status\n4. Return to Supplier Menu\n\nEnter your choice: "
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
