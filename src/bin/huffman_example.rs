use binheap_huffman::heap::{HeapOrder, LocatorBinaryHeap};
use binheap_huffman::huffman::{huffman_encode, HuffmanTree};
use binheap_huffman::{frequency::count_frequencies, Error};

fn main() -> Result<(), Error> {
    // identity-addressed priorities
    let mut heap = LocatorBinaryHeap::init([10, 2, 24, 340, 10, 11], HeapOrder::Max);
    heap.change(1, 500);
    heap.delete(3);
    print!("locator heap drained by priority:");
    while !heap.is_empty() {
        let top = heap.extract_top();
        print!(" {}:{}", top.identity, top.value);
    }
    println!();

    let text = "aaaabbbccx";
    let codes = huffman_encode(text);
    println!("symbol codes\n{}", codes);

    if let Some(tree) = HuffmanTree::build(&count_frequencies(text)) {
        println!("huffman tree\n{}", tree);
        let encoded = codes.encode(text)?;
        println!("concatenated code\n{}", encoded);
        println!("decoded text\n{}", tree.decode(encoded.as_slice())?);
    }
    Ok(())
}
