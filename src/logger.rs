use crate::huffman::CodeTable;

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file("log4rs.yaml", Default::default()) {
        eprintln!("Logging disabled, unable to load log4rs.yaml: {}", e);
    }
}

pub fn log_code_table(table: &CodeTable) {
    for (symbol, code) in table.iter() {
        log::debug!("{:?} -> {} ({} bits)", symbol, code, code.len());
    }
}
