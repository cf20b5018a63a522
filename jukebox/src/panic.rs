use core::panic::PanicInfo;

use crate::console::println;

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    avr_device::interrupt::disable();
    println!("Panicked!");
    loop {
        avr_device::asm::sleep();
    }
}
