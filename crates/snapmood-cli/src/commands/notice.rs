use snapmood_core::notice::Notice;

pub fn run(key: &str) {
    let notice = Notice::from_key(key);
    println!("[{}] {}", notice.key(), notice.title());
    println!("{}", notice.message());
}
