use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text to encoded ciphertext
    Encrypt(CipherArgs),

    /// Decrypt encoded ciphertext to text
    Decrypt(CipherArgs),

    /// Print a random key and IV suitable for --key and --iv
    GenKey(GenKeyArgs),
}

#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Mode of operation (cbc, ecb, cfb, ofb, ctr). Unknown names fall back to cbc.
    #[arg(short = 'm', long = "mode", default_value = "cbc")]
    pub mode: String,

    /// Padding for cbc and ecb (pkcs7, zeropadding, nopadding). Unknown names fall back
    /// to pkcs7. Ignored by stream modes.
    #[arg(short = 'p', long = "padding", default_value = "pkcs7")]
    pub padding: String,

    /// Key size in bits.
    #[arg(
        short = 's',
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits128,
    )]
    pub key_size: KeySize,

    /// Ciphertext encoding.
    #[arg(
        short = 'e',
        long = "encoding",
        value_enum,
        default_value_t = Encoding::Base64,
    )]
    pub encoding: Encoding,

    /// Key text. Longer keys are truncated to the key size.
    #[arg(short = 'k', long = "key", env = "AES_TEXT_KEY", hide_env_values = true)]
    pub key: String,

    /// IV text (16 bytes, longer is truncated). Not used in ecb mode.
    #[arg(long = "iv", env = "AES_TEXT_IV", hide_env_values = true, default_value = "")]
    pub iv: String,

    /// Payload given inline.
    #[arg(short = 't', long = "text", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file path. Reads stdin when neither --text nor --input is given.
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file path. Writes stdout when omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenKeyArgs {
    #[arg(
        short = 's',
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits256,
    )]
    pub key_size: KeySize,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl From<KeySize> for aes_text::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => aes_text::KeySize::Bits128,
            KeySize::Bits192 => aes_text::KeySize::Bits192,
            KeySize::Bits256 => aes_text::KeySize::Bits256,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Encoding {
    #[value(name = "base64")]
    Base64,
    #[value(name = "hex")]
    Hex,
    #[value(name = "utf8")]
    Utf8,
}

impl From<Encoding> for aes_text::Encoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Base64 => aes_text::Encoding::Base64,
            Encoding::Hex => aes_text::Encoding::Hex,
            Encoding::Utf8 => aes_text::Encoding::Utf8,
        }
    }
}
