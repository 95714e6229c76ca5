use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::fs;
use url::Url;

use chapter_index::{
    HttpSource, ManifestBuilder, logger, render_chapter_list, resolve_chapters,
};

#[derive(Parser)]
#[command(name = "chapter-index")]
#[command(about = "生成并渲染阅读站点的章节目录", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 扫描章节目录并生成 chapters.json 清单
    Build {
        /// 章节文本所在目录
        #[arg(long, default_value = "origin")]
        origin: PathBuf,

        /// 排序配置文件
        #[arg(long, default_value = "chapters.config.json")]
        config: PathBuf,

        /// 清单输出路径
        #[arg(long, default_value = "chapters.json")]
        out: PathBuf,
    },

    /// 获取章节列表并渲染成 HTML 片段
    Render {
        /// 站点根地址，例如 https://example.com/
        #[arg(long)]
        base_url: Url,

        /// 输出文件，缺省时打印到标准输出
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            origin,
            config,
            out,
        } => {
            let builder = ManifestBuilder::new(origin, config, out.clone());
            let count = builder.build().await?;
            println!("清单生成完成: {}，共 {} 个章节", out.display(), count);
        }
        Commands::Render { base_url, out } => {
            let source = HttpSource::new(base_url);
            let chapters = resolve_chapters(&source).await;
            let html = render_chapter_list(&chapters);
            match out {
                Some(path) => {
                    fs::write(&path, &html).await?;
                    println!("章节列表已渲染到: {}", path.display());
                }
                None => print!("{}", html),
            }
        }
    }

    Ok(())
}
