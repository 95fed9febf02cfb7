//! # Terminal Session
//!
//! The interactive menu loop that drives the cart and catalog.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Session Loop                             │
//! │                                                                 │
//! │        ┌──────────────────── MENU ◄───────────────────┐         │
//! │        │      │      │        │        │      │       │         │
//! │        ▼      ▼      ▼        ▼        ▼      ▼       │         │
//! │     View    Add   Remove    View    Checkout Exit     │         │
//! │   Products  to    from      Cart       │      │       │         │
//! │        │   Cart   Cart        │        │   (ends)     │         │
//! │        └──────┴──────┴────────┴────────┴──────────────┘         │
//! │                                                                 │
//! │  Every branch returns to MENU except Exit. EOF anywhere ends    │
//! │  the session cleanly (a closed stdin must not spin forever).    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//! All core errors are caught here and converted to user-facing text.
//! The add and remove flows collapse parse, selection, and cart errors
//! into one generic message each; the specific cause is logged at debug
//! level so it is still observable with `RUST_LOG=debug`.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use corner_core::{Cart, CartError, Catalog, CheckoutError, Money, Receipt, Totals};

use crate::render;

// =============================================================================
// Menu Choice
// =============================================================================

/// One of the six main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    AddToCart,
    RemoveFromCart,
    ViewCart,
    Checkout,
    Exit,
}

impl MenuChoice {
    /// Parses a menu line; `None` for anything but "1".."6".
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ViewProducts),
            "2" => Some(MenuChoice::AddToCart),
            "3" => Some(MenuChoice::RemoveFromCart),
            "4" => Some(MenuChoice::ViewCart),
            "5" => Some(MenuChoice::Checkout),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

// =============================================================================
// Flow Errors
// =============================================================================

/// Why an interactive flow was abandoned. Only ever logged; the console
/// gets the collapsed generic message.
#[derive(Debug)]
enum FlowError {
    /// Input that should have been a number but was not.
    Parse(String),
    /// 1-based product index outside the catalog.
    Selection(usize),
    /// A reservation rule rejected the operation.
    Cart(CartError),
    /// EOF arrived mid-prompt.
    Aborted,
}

impl From<CartError> for FlowError {
    fn from(err: CartError) -> Self {
        FlowError::Cart(err)
    }
}

// =============================================================================
// Session
// =============================================================================

/// The whole process state: catalog plus the current cart, bound to an
/// input/output pair. Generic over `BufRead`/`Write` so tests can script
/// a session against in-memory buffers.
pub struct Session<R, W> {
    catalog: Catalog,
    cart: Cart,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, input: R, out: W) -> Self {
        Session {
            catalog,
            cart: Cart::new(),
            input,
            out,
        }
    }

    /// Runs the menu loop until Exit or EOF.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            render::menu(&mut self.out)?;
            let Some(line) = self.read_line()? else {
                debug!("EOF at menu prompt, ending session");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::ViewProducts) => {
                    render::catalog(&mut self.out, &self.catalog)?;
                }
                Some(MenuChoice::AddToCart) => self.add_to_cart()?,
                Some(MenuChoice::RemoveFromCart) => self.remove_from_cart()?,
                Some(MenuChoice::ViewCart) => render::cart(&mut self.out, &self.cart)?,
                Some(MenuChoice::Checkout) => self.checkout()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.out, "THANK YOU FOR SHOPPING AT CORNER MART!")?;
                    break;
                }
                None => {
                    writeln!(self.out, "Invalid choice. Please enter 1-6.")?;
                }
            }
        }
        Ok(())
    }

    /// Reads one trimmed line; `None` on EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.read_line()
    }

    // -------------------------------------------------------------------------
    // Add to Cart
    // -------------------------------------------------------------------------

    fn add_to_cart(&mut self) -> io::Result<()> {
        render::catalog(&mut self.out, &self.catalog)?;
        writeln!(self.out)?;

        match self.try_add_to_cart()? {
            Ok((name, quantity)) => {
                writeln!(self.out, "Added {} {}(s) to cart", quantity, name)?;
            }
            Err(reason) => {
                // Collapsed on purpose: the menu reports one generic message
                // for parse, selection, and reservation failures alike.
                debug!(?reason, "add to cart rejected");
                writeln!(self.out, "Error: Invalid product selection")?;
            }
        }
        Ok(())
    }

    fn try_add_to_cart(&mut self) -> io::Result<Result<(String, i64), FlowError>> {
        let Some(raw) = self.prompt("Enter product number: ")? else {
            return Ok(Err(FlowError::Aborted));
        };
        let index: usize = match raw.parse() {
            Ok(n) => n,
            Err(_) => return Ok(Err(FlowError::Parse(raw))),
        };
        let Some(product) = self.catalog.by_index(index) else {
            return Ok(Err(FlowError::Selection(index)));
        };
        let (id, name) = (product.id, product.name.clone());

        let Some(raw) = self.prompt(&format!("Enter quantity for {}: ", name))? else {
            return Ok(Err(FlowError::Aborted));
        };
        let quantity: i64 = match raw.parse() {
            Ok(n) => n,
            Err(_) => return Ok(Err(FlowError::Parse(raw))),
        };

        let Some(product) = self.catalog.get(id) else {
            return Ok(Err(FlowError::Selection(index)));
        };
        match self.cart.add_item(product, quantity) {
            Ok(()) => Ok(Ok((name, quantity))),
            Err(err) => Ok(Err(err.into())),
        }
    }

    // -------------------------------------------------------------------------
    // Remove from Cart
    // -------------------------------------------------------------------------

    fn remove_from_cart(&mut self) -> io::Result<()> {
        render::cart(&mut self.out, &self.cart)?;
        if self.cart.is_empty() {
            return Ok(());
        }
        writeln!(self.out)?;

        match self.try_remove_from_cart()? {
            Ok((name, quantity)) => {
                writeln!(self.out, "Removed {} {}(s) from cart", quantity, name)?;
            }
            Err(reason) => {
                debug!(?reason, "remove from cart rejected");
                writeln!(self.out, "Error: Invalid Product Name or Quantity Amount")?;
                writeln!(
                    self.out,
                    "Product names are case sensitive and must match the cart listing exactly."
                )?;
            }
        }
        Ok(())
    }

    fn try_remove_from_cart(&mut self) -> io::Result<Result<(String, i64), FlowError>> {
        let Some(name) = self.prompt("Enter product name to remove: ")? else {
            return Ok(Err(FlowError::Aborted));
        };
        let Some(line) = self.cart.find_by_name(&name) else {
            return Ok(Err(FlowError::Cart(CartError::NotInCart)));
        };
        let (id, in_cart) = (line.product_id, line.quantity);

        let Some(raw) = self.prompt(&format!("Enter quantity to remove (max {}): ", in_cart))?
        else {
            return Ok(Err(FlowError::Aborted));
        };
        let quantity: i64 = match raw.parse() {
            Ok(n) => n,
            Err(_) => return Ok(Err(FlowError::Parse(raw))),
        };

        match self.cart.remove_item(id, quantity) {
            Ok(()) => Ok(Ok((name, quantity))),
            Err(err) => Ok(Err(err.into())),
        }
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// The commit point of the whole program.
    ///
    /// Order summary, then a blocking payment loop, then: receipt built
    /// from the cart, stock decremented exactly once per line, cart
    /// replaced with a fresh empty one.
    fn checkout(&mut self) -> io::Result<()> {
        if self.cart.is_empty() {
            writeln!(self.out, "Your cart is empty")?;
            return Ok(());
        }

        let totals = Totals::compute(self.cart.subtotal());
        render::order_summary(&mut self.out, &self.cart, &totals)?;

        let Some((paid, change)) = self.collect_payment(&totals)? else {
            // EOF mid-payment: abandon checkout, reservations stay intact.
            debug!("payment prompt aborted, cart left intact");
            return Ok(());
        };

        let receipt = Receipt::new(&self.cart, totals, paid, change);
        self.catalog.commit(&self.cart);
        self.cart = Cart::new();

        render::receipt(&mut self.out, &receipt)?;
        render::low_stock_alert(&mut self.out, &self.catalog)?;

        info!(
            total = %receipt.totals.total,
            paid = %receipt.paid,
            change = %receipt.change,
            lines = receipt.lines.len(),
            "sale completed"
        );
        Ok(())
    }

    /// Prompts for payment until the tendered amount covers the total.
    ///
    /// No upper bound on attempts; returns `None` only on EOF.
    fn collect_payment(&mut self, totals: &Totals) -> io::Result<Option<(Money, Money)>> {
        loop {
            writeln!(self.out)?;
            let Some(raw) = self.prompt("Enter payment amount: $")? else {
                return Ok(None);
            };

            let amount = match raw.parse::<Money>() {
                Ok(amount) => amount,
                Err(err) => {
                    debug!(%err, "unparseable payment amount");
                    writeln!(self.out, "Invalid amount. Please enter a number")?;
                    continue;
                }
            };

            match totals.change_for(amount) {
                Ok(change) => return Ok(Some((amount, change))),
                Err(CheckoutError::InsufficientPayment { total }) => {
                    writeln!(self.out, "Amount must be at least {}", total)?;
                }
            }
        }
    }
}

// =============================================================================
// Scripted Session Tests
// =============================================================================
