//! Security Adapters - 密码哈希

mod bcrypt_hasher;

pub use bcrypt_hasher::BcryptPasswordHasher;
