pub mod loan_reader;
