fn main() {
    curconv::term::main();
}
