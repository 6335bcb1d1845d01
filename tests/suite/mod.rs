mod process;
mod scenarios;
