pub const GIT_DESCRIBE: &str = env!("GIT_DESCRIBE");
pub const GIT_HASH: &str = env!("GIT_HASH");

pub fn print_report(name: &str) {
    println!("{{");
    println!("  \"name\": \"{}\",", name);
    println!("  \"version\": \"{}\",", env!("CARGO_PKG_VERSION"));
    println!("  \"git_describe\": \"{}\",", GIT_DESCRIBE.trim());
    println!("  \"git_hash\": \"{}\"", GIT_HASH.trim());
    println!("}}");
}
