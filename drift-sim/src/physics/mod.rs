pub mod vehicle;

#[cfg(test)]
mod tests;
