use crate::error::CliError;
use crate::exit_codes;
use argh::FromArgs;
use std::path::PathBuf;
use xnb_transcode_file_formats_api::file_io::with_mapped_file;
use xnb_transcode_file_formats_api::{DecodeError, DecodeResult};
use xnb_transcode_xnb::xnb::{parse_xnb, parse_xnb_contents};

#[derive(FromArgs, Debug)]
/// Print the header and texture details of a single XNB file
#[argh(subcommand, name = "inspect")]
pub struct InspectCmd {
    /// path to the XNB file
    #[argh(positional)]
    pub file: PathBuf,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

pub fn handle_inspect_command(cmd: InspectCmd) -> Result<i32, CliError> {
    let description = with_mapped_file(&cmd.file, describe_xnb)?;
    print!("{description}");
    Ok(exit_codes::OK)
}

/// Renders what is known about an XNB file.
///
/// The texture section is replaced by a note when the primary asset is not a
/// `Texture2D`.
pub fn describe_xnb(data: &[u8]) -> DecodeResult<String> {
    let contents = parse_xnb_contents(data)?;
    let header = &contents.header;
    let profile = if header.is_hidef() { "HiDef" } else { "Reach" };

    let mut lines = vec![
        format!("Platform:  {}", header.platform),
        format!("Version:   {} ({})", header.version, header.version_name()),
        format!("Profile:   {profile}"),
        format!("File size: {} bytes", header.file_size),
        "Readers:".to_owned(),
    ];
    for (index, reader) in contents.readers.iter().enumerate() {
        let marker = if index == contents.primary_reader { '*' } else { ' ' };
        lines.push(format!("  {marker} {} (v{})", reader.type_name(), reader.version));
    }
    lines.push(format!("Shared resources: {}", contents.shared_resource_count));

    match parse_xnb(data) {
        Ok(texture) => {
            lines.push(format!("Format:    {}", texture.format));
            lines.push(format!("Size:      {}x{}", texture.width, texture.height));
            lines.push(format!("Mips:      {}", texture.mip_count));
        }
        Err(DecodeError::NotATexture(type_name)) => {
            lines.push(format!("Not a texture: primary asset is read by {type_name}"));
        }
        Err(e) => return Err(e),
    }

    lines.push(String::new());
    Ok(lines.join("\n"))
}
