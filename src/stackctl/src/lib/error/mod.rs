/// The type to represent stackctl results.
pub type StackResult<T = ()> = anyhow::Result<T>;
