pub mod scenario;
pub mod timeline;

#[cfg(test)]
mod tests;
