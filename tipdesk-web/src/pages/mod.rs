mod employers;
mod error;
pub mod login;
mod map;
mod settings;
mod transaction_detail;
mod transactions;
mod withdrawals;

pub use employers::EmployersPage;
pub use error::ErrorPage;
pub use login::LoginPage;
pub use map::MapPage;
pub use settings::SettingsPage;
pub use transaction_detail::TransactionDetailPage;
pub use transactions::TransactionsPage;
pub use withdrawals::WithdrawalsPage;
