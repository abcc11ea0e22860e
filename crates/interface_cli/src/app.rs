//! Interactive application loop
//!
//! Auth menu first, then the per-user dashboard. Each handler gathers
//! input, makes exactly one service call, and renders the typed outcome.

use anyhow::Result;
use tracing::debug;

use core_kernel::{AccountId, UserId};
use domain_banking::{Account, BankingService, Transaction};
use domain_user::AuthService;
use infra_memory::{MemoryAccountStore, MemoryTransactionStore, MemoryUserStore};

use crate::config::CliConfig;
use crate::input;

/// The console application: services plus configuration
pub struct App {
    config: CliConfig,
    auth: AuthService<MemoryUserStore>,
    bank: BankingService<MemoryAccountStore, MemoryTransactionStore>,
}

impl App {
    /// Creates the application over fresh in-memory stores
    pub fn new(config: CliConfig) -> Self {
        Self {
            config,
            auth: AuthService::new(MemoryUserStore::new()),
            bank: BankingService::new(MemoryAccountStore::new(), MemoryTransactionStore::new()),
        }
    }

    /// Runs the auth menu until the user exits
    pub fn run(&mut self) -> Result<()> {
        loop {
            println!();
            println!("=== {} ===", self.config.bank_name);
            println!("  1. Register");
            println!("  2. Login");
            println!("  3. Exit");
            match input::prompt_choice("Choice", 3)? {
                1 => self.register()?,
                2 => self.login()?,
                _ => {
                    println!("Goodbye.");
                    return Ok(());
                }
            }
        }
    }

    fn register(&mut self) -> Result<()> {
        let full_name = input::prompt("Full name")?;
        let email = input::prompt("Email")?;
        let address = input::prompt("Address")?;
        let password = input::prompt("Password")?;

        match self.auth.register(&full_name, &email, &address, &password) {
            Ok(user) => println!("Registered. Welcome, {}!", user.full_name),
            Err(err) => println!("Registration failed: {err}"),
        }
        Ok(())
    }

    fn login(&mut self) -> Result<()> {
        let email = input::prompt("Email")?;
        let password = input::prompt("Password")?;

        match self.auth.login(&email, &password) {
            Ok(user) => self.dashboard(user.id, &user.full_name)?,
            Err(err) => println!("Login failed: {err}"),
        }
        Ok(())
    }

    /// Per-user dashboard; returns when the user logs out
    fn dashboard(&mut self, user_id: UserId, full_name: &str) -> Result<()> {
        loop {
            println!();
            println!("--- Dashboard ({full_name}) ---");
            println!("  1. Open account");
            println!("  2. My accounts");
            println!("  3. Deposit");
            println!("  4. Withdraw");
            println!("  5. Transfer");
            println!("  6. Transaction history");
            println!("  7. Close account");
            println!("  8. Logout");
            match input::prompt_choice("Choice", 8)? {
                1 => self.open_account(user_id)?,
                2 => self.list_accounts(user_id),
                3 => self.deposit(user_id)?,
                4 => self.withdraw(user_id)?,
                5 => self.transfer(user_id)?,
                6 => self.history(user_id)?,
                7 => self.close_account(user_id)?,
                _ => {
                    if let Err(err) = self.auth.logout(user_id) {
                        debug!(%user_id, %err, "logout failed");
                    }
                    return Ok(());
                }
            }
        }
    }

    fn open_account(&mut self, user_id: UserId) -> Result<()> {
        let account_type = input::prompt_account_type()?;
        match self.bank.open_account(user_id, account_type) {
            Ok(account) => println!("Opened {} ({})", account.account_type, account.id),
            Err(err) => println!("Could not open account: {err}"),
        }
        Ok(())
    }

    fn list_accounts(&self, user_id: UserId) {
        let accounts = self.bank.accounts_of(user_id);
        if accounts.is_empty() {
            println!("You have no accounts yet.");
            return;
        }
        for account in accounts {
            render_account(&account);
        }
    }

    fn deposit(&mut self, user_id: UserId) -> Result<()> {
        let Some(account_id) = self.select_account(user_id)? else {
            return Ok(());
        };
        let amount = input::prompt_amount("Amount")?;
        match self.bank.deposit(account_id, amount) {
            Ok(_) => {
                if let Ok(balance) = self.bank.balance(account_id) {
                    println!("Deposit complete. New balance: {balance}");
                }
            }
            Err(err) => println!("Deposit failed: {err}"),
        }
        Ok(())
    }

    fn withdraw(&mut self, user_id: UserId) -> Result<()> {
        let Some(account_id) = self.select_account(user_id)? else {
            return Ok(());
        };
        let amount = input::prompt_amount("Amount")?;
        match self.bank.withdraw(account_id, amount) {
            Ok(_) => {
                if let Ok(balance) = self.bank.balance(account_id) {
                    println!("Withdrawal complete. New balance: {balance}");
                }
            }
            Err(err) => println!("Withdrawal failed: {err}"),
        }
        Ok(())
    }

    fn transfer(&mut self, user_id: UserId) -> Result<()> {
        let Some(source_id) = self.select_account(user_id)? else {
            return Ok(());
        };
        // Destination may belong to another user; entered by id.
        let dest_input = input::prompt("Destination account id")?;
        let dest_id: AccountId = match dest_input.parse() {
            Ok(id) => id,
            Err(_) => {
                println!("Not a valid account id.");
                return Ok(());
            }
        };
        let amount = input::prompt_amount("Amount")?;
        match self.bank.transfer(source_id, dest_id, amount) {
            Ok(receipt) => println!(
                "Transfer complete: {} moved to {}.",
                receipt.debit.amount, receipt.credit.account_id
            ),
            Err(err) => println!("Transfer failed: {err}"),
        }
        Ok(())
    }

    fn history(&mut self, user_id: UserId) -> Result<()> {
        let Some(account_id) = self.select_account(user_id)? else {
            return Ok(());
        };
        match self.bank.history(account_id) {
            Ok(history) if history.is_empty() => println!("No transactions yet."),
            Ok(history) => {
                for transaction in &history {
                    render_transaction(transaction);
                }
            }
            Err(err) => println!("Could not load history: {err}"),
        }
        Ok(())
    }

    fn close_account(&mut self, user_id: UserId) -> Result<()> {
        let Some(account_id) = self.select_account(user_id)? else {
            return Ok(());
        };
        match self.bank.close_account(user_id, account_id) {
            Ok(account) => println!("Account {} closed.", account.id),
            Err(err) => println!("Could not close account: {err}"),
        }
        Ok(())
    }

    /// Lists the user's open accounts and asks for a pick
    fn select_account(&self, user_id: UserId) -> Result<Option<AccountId>> {
        let accounts = self.bank.open_accounts_of(user_id);
        if accounts.is_empty() {
            println!("You need an open account first.");
            return Ok(None);
        }
        for (i, account) in accounts.iter().enumerate() {
            println!(
                "  {}. {} | {} ({})",
                i + 1,
                account.account_type,
                account.balance,
                account.id
            );
        }
        let choice = input::prompt_choice("Account", accounts.len())?;
        Ok(Some(accounts[choice - 1].id))
    }
}

fn render_account(account: &Account) {
    println!(
        "{} | {} | {} | {:?}",
        account.id, account.account_type, account.balance, account.status
    );
}

fn render_transaction(transaction: &Transaction) {
    println!("{}", "=".repeat(40));
    println!("Id      : {}", transaction.id);
    println!("Account : {}", transaction.account_id);
    println!("Kind    : {}", transaction.kind);
    println!("Amount  : {}", transaction.amount);
    println!("Date    : {}", transaction.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"));
}
