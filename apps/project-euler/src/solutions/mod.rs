pub mod pe1;
pub mod pe18;
pub mod pe2;
pub mod pe3;
pub mod pe4;
pub mod pe5;
pub mod pe6;
pub mod pe7;
