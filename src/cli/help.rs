pub fn print_help() {
    println!(
        "\
classpass {version}
Draws distinct characters from four character classes and shuffles them.

USAGE:
    classpass [OPTIONS]

With no class options a 4 digit numeric password is printed.

CLASSES (COUNT is N or MIN:MAX; naming a class disables the others):
    -a, --all                  Use all four classes with their default counts
    -U, --upper [COUNT]        Uppercase letters     (default 4:7)
    -L, --lower [COUNT]        Lowercase letters     (default 4:7)
    -D, --digits [COUNT]       Digits                (default 1:5)
    -S, --special [COUNT]      Special symbols       (default 1:5)

ALPHABETS:
        --upper-chars CHARS    Replace the uppercase alphabet
        --lower-chars CHARS    Replace the lowercase alphabet
        --digit-chars CHARS    Replace the digit alphabet
        --special-chars CHARS  Replace the special alphabet (default ~!@#$%^&*?_+-)

OUTPUT:
    -n, --number N             Number of passwords to generate
        --no-shuffle           Keep characters grouped by class
    -b, --board                Copy to clipboard instead of printing
    -q, --quiet                Suppress warnings and prompts
    -h, --help                 Show this help
    -v, --version              Show version

Counts are clamped to the alphabet size, a minimum above the maximum is
lowered to it, and negative values fall back to the class default.
Set RUST_LOG=debug to see the resolved counts.",
        version = env!("CARGO_PKG_VERSION")
    );
}
