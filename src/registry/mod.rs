/// Persistence of "already shown" flags.
pub mod shown;
