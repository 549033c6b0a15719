mod balance;
mod feature;
mod transaction;
mod user;
