use bit_queue::{BitQueue, BitQueueError, NibbleQueue};

fn main() -> Result<(), BitQueueError> {
    println!("=== Bit Queue Examples ===\n");

    // Example 1: packing a small record into one register
    example_packed_record()?;

    // Example 2: draining from both ends
    example_both_ends()?;

    // Example 3: hex digits via the nibble view
    example_hex_digits()?;

    Ok(())
}

fn example_packed_record() -> Result<(), BitQueueError> {
    println!("Example 1: Packing an instruction word");

    // 3-bit opcode, 4-bit register id, 1-bit immediate flag, 8-bit operand
    let mut word: BitQueue<u16> = BitQueue::new();
    word.push_back(0b011, 3)?;
    word.push_back(0b1010, 4)?;
    word.push_back(1, 1)?;
    word.push_back(0x7F, 8)?;

    println!("  Packed {} of {} bits", word.len(), word.capacity());
    println!("  Register: {:#06x}", word.value());

    println!("  Opcode:   {:#05b}", word.pop_front(3)?);
    println!("  Register: {:#06b}", word.pop_front(4)?);
    println!("  ImmFlag:  {}", word.pop_front(1)?);
    println!("  Operand:  {:#04x}", word.pop_front(8)?);
    println!();

    Ok(())
}

fn example_both_ends() -> Result<(), BitQueueError> {
    println!("Example 2: FIFO front, LIFO back");

    let mut q: BitQueue<u8> = BitQueue::new();
    for bit in [1u8, 0, 0, 1, 1] {
        q.push_back(bit, 1)?;
    }

    println!("  Oldest bit (front): {}", q.pop_front(1)?);
    println!("  Newest bit (back):  {}", q.pop_back(1)?);
    println!("  Remaining bits:     {:#05b} ({} held)", q.value(), q.len());
    println!();

    Ok(())
}

fn example_hex_digits() -> Result<(), BitQueueError> {
    println!("Example 3: Hex digits of a word, nibble by nibble");

    let mut q: NibbleQueue<u32> = NibbleQueue::from_full(0xDEADBEEF);

    print!("  0x");
    while q.can_pop(1) {
        let nibble = q.pop_nibble()?;
        print!("{:X}", nibble);
    }
    println!();

    Ok(())
}
