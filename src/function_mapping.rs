//! The symbol manifest.
//!
//! Every GL entry point is declared once in [`gl_manifest!`], which hands the list to
//! a callback macro in [`crate::symbols`], [`crate::table`] or [`crate::facade`]:
//!
//! ```text
//! fn Begin(mode: GLenum);
//! require gl 1 . 0;
//! removed gl 3 . 1;
//!
//! fn DebugMessageCallbackKHR(callback: GLDEBUGPROC, user_param: *const c_void);
//! require ext KHR_debug in es;
//! ```
//!
//! `removed gl` marks entry points core profiles drop from that version on, and
//! `in gl` / `in es` restricts the extensions to one API. Callbacks receive
//!
//! ```text
//! Begin(mode: GLenum) [] gl: Some((1, 0)), es: None, ext: [], ext_api: None, removed_gl: Some((3, 1));
//! ```
//!
//! and need `gl::types::*` and `std::ffi::c_void` in scope.

macro_rules! normalize {
	($callback:ident; $(
		fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
		$(require gl $gl_major:literal . $gl_minor:literal;)?
		$(require es $es_major:literal . $es_minor:literal;)?
		$(require ext $($ext:ident),+ $(in $ext_api:ident)?;)?
		$(removed gl $removed_major:literal . $removed_minor:literal;)?
	)*) => {
		$callback! {
			$(
				$name($($arg: $ty),*) [$($ret)?]
					gl: $crate::function_mapping::opt_version!($($gl_major, $gl_minor)?),
					es: $crate::function_mapping::opt_version!($($es_major, $es_minor)?),
					ext: [$($($ext),+)?],
					ext_api: $crate::function_mapping::opt_api!($($($ext_api)?)?),
					removed_gl: $crate::function_mapping::opt_version!($($removed_major, $removed_minor)?);
			)*
		}
	};
}

macro_rules! opt_version {
	() => {
		None
	};
	($major:literal, $minor:literal) => {
		Some(($major, $minor))
	};
}

macro_rules! opt_api {
	() => {
		None
	};
	(gl) => {
		Some($crate::version::VersionType::GL)
	};
	(es) => {
		Some($crate::version::VersionType::ES)
	};
}

macro_rules! gl_manifest {
	($callback:ident) => {
		$crate::function_mapping::normalize! { $callback;
			// OpenGL 1.0
			fn CullFace(mode: GLenum);
			require gl 1 . 0;
			require es 2 . 0;

			fn FrontFace(mode: GLenum);
			require gl 1 . 0;
			require es 2 . 0;

			fn Hint(target: GLenum, mode: GLenum);
			require gl 1 . 0;
			require es 2 . 0;

			fn LineWidth(width: GLfloat);
			require gl 1 . 0;
			require es 2 . 0;

			fn PointSize(size: GLfloat);
			require gl 1 . 0;

			fn PolygonMode(face: GLenum, mode: GLenum);
			require gl 1 . 0;

			fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
			require gl 1 . 0;
			require es 2 . 0;

			fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
			require gl 1 . 0;
			require es 2 . 0;

			fn TexParameteri(target: GLenum, pname: GLenum, param: GLint);
			require gl 1 . 0;
			require es 2 . 0;

			fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
			require gl 1 . 0;
			require es 2 . 0;

			fn TexImage2D(
				target: GLenum,
				level: GLint,
				internalformat: GLint,
				width: GLsizei,
				height: GLsizei,
				border: GLint,
				format: GLenum,
				type_: GLenum,
				pixels: *const c_void,
			);
			require gl 1 . 0;
			require es 2 . 0;

			fn DrawBuffer(buf: GLenum);
			require gl 1 . 0;

			fn Clear(mask: GLbitfield);
			require gl 1 . 0;
			require es 2 . 0;

			fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
			require gl 1 . 0;
			require es 2 . 0;

			fn ClearStencil(s: GLint);
			require gl 1 . 0;
			require es 2 . 0;

			fn ClearDepth(depth: GLdouble);
			require gl 1 . 0;

			fn StencilMask(mask: GLuint);
			require gl 1 . 0;
			require es 2 . 0;

			fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
			require gl 1 . 0;
			require es 2 . 0;

			fn DepthMask(flag: GLboolean);
			require gl 1 . 0;
			require es 2 . 0;

			fn Disable(cap: GLenum);
			require gl 1 . 0;
			require es 2 . 0;

			fn Enable(cap: GLenum);
			require gl 1 . 0;
			require es 2 . 0;

			fn Finish();
			require gl 1 . 0;
			require es 2 . 0;

			fn Flush();
			require gl 1 . 0;
			require es 2 . 0;

			fn BlendFunc(sfactor: GLenum, dfactor: GLenum);
			require gl 1 . 0;
			require es 2 . 0;

			fn StencilFunc(func: GLenum, ref_: GLint, mask: GLuint);
			require gl 1 . 0;
			require es 2 . 0;

			fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
			require gl 1 . 0;
			require es 2 . 0;

			fn DepthFunc(func: GLenum);
			require gl 1 . 0;
			require es 2 . 0;

			fn PixelStorei(pname: GLenum, param: GLint);
			require gl 1 . 0;
			require es 2 . 0;

			fn ReadBuffer(src: GLenum);
			require gl 1 . 0;
			require es 3 . 0;

			fn ReadPixels(
				x: GLint,
				y: GLint,
				width: GLsizei,
				height: GLsizei,
				format: GLenum,
				type_: GLenum,
				pixels: *mut c_void,
			);
			require gl 1 . 0;
			require es 2 . 0;

			fn GetBooleanv(pname: GLenum, data: *mut GLboolean);
			require gl 1 . 0;
			require es 2 . 0;

			fn GetError() -> GLenum;
			require gl 1 . 0;
			require es 2 . 0;

			fn GetFloatv(pname: GLenum, data: *mut GLfloat);
			require gl 1 . 0;
			require es 2 . 0;

			fn GetIntegerv(pname: GLenum, data: *mut GLint);
			require gl 1 . 0;
			require es 2 . 0;

			fn GetString(name: GLenum) -> *const GLubyte;
			require gl 1 . 0;
			require es 2 . 0;

			fn GetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
			require gl 1 . 0;

			fn IsEnabled(cap: GLenum) -> GLboolean;
			require gl 1 . 0;
			require es 2 . 0;

			fn DepthRange(near: GLdouble, far: GLdouble);
			require gl 1 . 0;

			fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
			require gl 1 . 0;
			require es 2 . 0;

			// OpenGL 1.0, compatibility profile only
			fn MatrixMode(mode: GLenum);
			require gl 1 . 0;
			removed gl 3 . 1;

			fn LoadIdentity();
			require gl 1 . 0;
			removed gl 3 . 1;

			fn Ortho(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, near: GLdouble, far: GLdouble);
			require gl 1 . 0;
			removed gl 3 . 1;

			fn Begin(mode: GLenum);
			require gl 1 . 0;
			removed gl 3 . 1;

			fn End();
			require gl 1 . 0;
			removed gl 3 . 1;

			fn Vertex2f(x: GLfloat, y: GLfloat);
			require gl 1 . 0;
			removed gl 3 . 1;

			fn TexCoord2f(s: GLfloat, t: GLfloat);
			require gl 1 . 0;
			removed gl 3 . 1;

			fn Color4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
			require gl 1 . 0;
			removed gl 3 . 1;

			// OpenGL 1.1
			fn EnableClientState(array: GLenum);
			require gl 1 . 1;
			removed gl 3 . 1;

			fn DisableClientState(array: GLenum);
			require gl 1 . 1;
			removed gl 3 . 1;

			fn VertexPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
			require gl 1 . 1;
			removed gl 3 . 1;

			fn TexCoordPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
			require gl 1 . 1;
			removed gl 3 . 1;

			fn ColorPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
			require gl 1 . 1;
			removed gl 3 . 1;

			fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
			require gl 1 . 1;
			require es 2 . 0;

			fn DrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
			require gl 1 . 1;
			require es 2 . 0;

			fn PolygonOffset(factor: GLfloat, units: GLfloat);
			require gl 1 . 1;
			require es 2 . 0;

			fn CopyTexImage2D(
				target: GLenum,
				level: GLint,
				internalformat: GLenum,
				x: GLint,
				y: GLint,
				width: GLsizei,
				height: GLsizei,
				border: GLint,
			);
			require gl 1 . 1;
			require es 2 . 0;

			fn CopyTexSubImage2D(
				target: GLenum,
				level: GLint,
				xoffset: GLint,
				yoffset: GLint,
				x: GLint,
				y: GLint,
				width: GLsizei,
				height: GLsizei,
			);
			require gl 1 . 1;
			require es 2 . 0;

			fn TexSubImage2D(
				target: GLenum,
				level: GLint,
				xoffset: GLint,
				yoffset: GLint,
				width: GLsizei,
				height: GLsizei,
				format: GLenum,
				type_: GLenum,
				pixels: *const c_void,
			);
			require gl 1 . 1;
			require es 2 . 0;

			fn BindTexture(target: GLenum, texture: GLuint);
			require gl 1 . 1;
			require es 2 . 0;

			fn DeleteTextures(n: GLsizei, textures: *const GLuint);
			require gl 1 . 1;
			require es 2 . 0;

			fn GenTextures(n: GLsizei, textures: *mut GLuint);
			require gl 1 . 1;
			require es 2 . 0;

			fn IsTexture(texture: GLuint) -> GLboolean;
			require gl 1 . 1;
			require es 2 . 0;

			// OpenGL 1.2
			fn DrawRangeElements(
				mode: GLenum,
				start: GLuint,
				end: GLuint,
				count: GLsizei,
				type_: GLenum,
				indices: *const c_void,
			);
			require gl 1 . 2;
			require es 3 . 0;

			fn TexImage3D(
				target: GLenum,
				level: GLint,
				internalformat: GLint,
				width: GLsizei,
				height: GLsizei,
				depth: GLsizei,
				border: GLint,
				format: GLenum,
				type_: GLenum,
				pixels: *const c_void,
			);
			require gl 1 . 2;
			require es 3 . 0;

			// OpenGL 1.3
			fn ActiveTexture(texture: GLenum);
			require gl 1 . 3;
			require es 2 . 0;

			fn ClientActiveTexture(texture: GLenum);
			require gl 1 . 3;
			removed gl 3 . 1;

			fn SampleCoverage(value: GLfloat, invert: GLboolean);
			require gl 1 . 3;
			require es 2 . 0;

			fn CompressedTexImage2D(
				target: GLenum,
				level: GLint,
				internalformat: GLenum,
				width: GLsizei,
				height: GLsizei,
				border: GLint,
				image_size: GLsizei,
				data: *const c_void,
			);
			require gl 1 . 3;
			require es 2 . 0;

			// OpenGL 1.4
			fn BlendFuncSeparate(
				sfactor_rgb: GLenum,
				dfactor_rgb: GLenum,
				sfactor_alpha: GLenum,
				dfactor_alpha: GLenum,
			);
			require gl 1 . 4;
			require es 2 . 0;

			fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
			require gl 1 . 4;
			require es 2 . 0;

			fn BlendEquation(mode: GLenum);
			require gl 1 . 4;
			require es 2 . 0;

			// OpenGL 1.5
			fn GenQueries(n: GLsizei, ids: *mut GLuint);
			require gl 1 . 5;
			require es 3 . 0;

			fn DeleteQueries(n: GLsizei, ids: *const GLuint);
			require gl 1 . 5;
			require es 3 . 0;

			fn BeginQuery(target: GLenum, id: GLuint);
			require gl 1 . 5;
			require es 3 . 0;

			fn EndQuery(target: GLenum);
			require gl 1 . 5;
			require es 3 . 0;

			fn BindBuffer(target: GLenum, buffer: GLuint);
			require gl 1 . 5;
			require es 2 . 0;

			fn DeleteBuffers(n: GLsizei, buffers: *const GLuint);
			require gl 1 . 5;
			require es 2 . 0;

			fn GenBuffers(n: GLsizei, buffers: *mut GLuint);
			require gl 1 . 5;
			require es 2 . 0;

			fn IsBuffer(buffer: GLuint) -> GLboolean;
			require gl 1 . 5;
			require es 2 . 0;

			fn BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
			require gl 1 . 5;
			require es 2 . 0;

			fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
			require gl 1 . 5;
			require es 2 . 0;

			fn MapBuffer(target: GLenum, access: GLenum) -> *mut c_void;
			require gl 1 . 5;

			fn UnmapBuffer(target: GLenum) -> GLboolean;
			require gl 1 . 5;
			require es 3 . 0;

			fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
			require gl 1 . 5;
			require es 2 . 0;

			// OpenGL 2.0
			fn BlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum);
			require gl 2 . 0;
			require es 2 . 0;

			fn DrawBuffers(n: GLsizei, bufs: *const GLenum);
			require gl 2 . 0;
			require es 3 . 0;

			fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
			require gl 2 . 0;
			require es 2 . 0;

			fn AttachShader(program: GLuint, shader: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
			require gl 2 . 0;
			require es 2 . 0;

			fn CompileShader(shader: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn CreateProgram() -> GLuint;
			require gl 2 . 0;
			require es 2 . 0;

			fn CreateShader(type_: GLenum) -> GLuint;
			require gl 2 . 0;
			require es 2 . 0;

			fn DeleteProgram(program: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn DeleteShader(shader: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn DetachShader(program: GLuint, shader: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn DisableVertexAttribArray(index: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn EnableVertexAttribArray(index: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
			require gl 2 . 0;
			require es 2 . 0;

			fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
			require gl 2 . 0;
			require es 2 . 0;

			fn GetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
			require gl 2 . 0;
			require es 2 . 0;

			fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
			require gl 2 . 0;
			require es 2 . 0;

			fn GetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
			require gl 2 . 0;
			require es 2 . 0;

			fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
			require gl 2 . 0;
			require es 2 . 0;

			fn IsProgram(program: GLuint) -> GLboolean;
			require gl 2 . 0;
			require es 2 . 0;

			fn IsShader(shader: GLuint) -> GLboolean;
			require gl 2 . 0;
			require es 2 . 0;

			fn LinkProgram(program: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
			require gl 2 . 0;
			require es 2 . 0;

			fn UseProgram(program: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn Uniform1f(location: GLint, v0: GLfloat);
			require gl 2 . 0;
			require es 2 . 0;

			fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
			require gl 2 . 0;
			require es 2 . 0;

			fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
			require gl 2 . 0;
			require es 2 . 0;

			fn Uniform1i(location: GLint, v0: GLint);
			require gl 2 . 0;
			require es 2 . 0;

			fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
			require gl 2 . 0;
			require es 2 . 0;

			fn UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
			require gl 2 . 0;
			require es 2 . 0;

			fn ValidateProgram(program: GLuint);
			require gl 2 . 0;
			require es 2 . 0;

			fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
			require gl 2 . 0;
			require es 2 . 0;

			fn VertexAttribPointer(
				index: GLuint,
				size: GLint,
				type_: GLenum,
				normalized: GLboolean,
				stride: GLsizei,
				pointer: *const c_void,
			);
			require gl 2 . 0;
			require es 2 . 0;

			// OpenGL 3.0
			fn ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
			require gl 3 . 0;
			require es 3 . 0;

			fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
			require gl 3 . 0;
			require es 3 . 0;

			fn BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);
			require gl 3 . 0;
			require es 3 . 0;

			fn BindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
			require gl 3 . 0;
			require es 3 . 0;

			fn MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
			require gl 3 . 0;
			require es 3 . 0;

			fn FlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr);
			require gl 3 . 0;
			require es 3 . 0;

			fn BindVertexArray(array: GLuint);
			require gl 3 . 0;
			require es 3 . 0;

			fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
			require gl 3 . 0;
			require es 3 . 0;

			fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint);
			require gl 3 . 0;
			require es 3 . 0;

			fn IsVertexArray(array: GLuint) -> GLboolean;
			require gl 3 . 0;
			require es 3 . 0;

			fn BindFramebuffer(target: GLenum, framebuffer: GLuint);
			require gl 3 . 0;
			require es 2 . 0;

			fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
			require gl 3 . 0;
			require es 2 . 0;

			fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
			require gl 3 . 0;
			require es 2 . 0;

			fn CheckFramebufferStatus(target: GLenum) -> GLenum;
			require gl 3 . 0;
			require es 2 . 0;

			fn FramebufferTexture2D(
				target: GLenum,
				attachment: GLenum,
				textarget: GLenum,
				texture: GLuint,
				level: GLint,
			);
			require gl 3 . 0;
			require es 2 . 0;

			fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint);
			require gl 3 . 0;
			require es 2 . 0;

			fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
			require gl 3 . 0;
			require es 2 . 0;

			fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
			require gl 3 . 0;
			require es 2 . 0;

			fn RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
			require gl 3 . 0;
			require es 2 . 0;

			fn FramebufferRenderbuffer(
				target: GLenum,
				attachment: GLenum,
				renderbuffertarget: GLenum,
				renderbuffer: GLuint,
			);
			require gl 3 . 0;
			require es 2 . 0;

			fn GenerateMipmap(target: GLenum);
			require gl 3 . 0;
			require es 2 . 0;

			fn BlitFramebuffer(
				src_x0: GLint,
				src_y0: GLint,
				src_x1: GLint,
				src_y1: GLint,
				dst_x0: GLint,
				dst_y0: GLint,
				dst_x1: GLint,
				dst_y1: GLint,
				mask: GLbitfield,
				filter: GLenum,
			);
			require gl 3 . 0;
			require es 3 . 0;

			fn VertexAttribIPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
			require gl 3 . 0;
			require es 3 . 0;

			// OpenGL 3.1
			fn DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
			require gl 3 . 1;
			require es 3 . 0;

			fn DrawElementsInstanced(
				mode: GLenum,
				count: GLsizei,
				type_: GLenum,
				indices: *const c_void,
				instancecount: GLsizei,
			);
			require gl 3 . 1;
			require es 3 . 0;

			fn GetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint;
			require gl 3 . 1;
			require es 3 . 0;

			fn UniformBlockBinding(program: GLuint, uniform_block_index: GLuint, uniform_block_binding: GLuint);
			require gl 3 . 1;
			require es 3 . 0;

			fn CopyBufferSubData(
				read_target: GLenum,
				write_target: GLenum,
				read_offset: GLintptr,
				write_offset: GLintptr,
				size: GLsizeiptr,
			);
			require gl 3 . 1;
			require es 3 . 0;

			fn TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint);
			require gl 3 . 1;
			require es 3 . 2;

			// OpenGL 3.2
			fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
			require gl 3 . 2;
			require es 3 . 0;

			fn DeleteSync(sync: GLsync);
			require gl 3 . 2;
			require es 3 . 0;

			fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
			require gl 3 . 2;
			require es 3 . 0;

			fn WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
			require gl 3 . 2;
			require es 3 . 0;

			fn IsSync(sync: GLsync) -> GLboolean;
			require gl 3 . 2;
			require es 3 . 0;

			// OpenGL 3.3
			fn GenSamplers(count: GLsizei, samplers: *mut GLuint);
			require gl 3 . 3;
			require es 3 . 0;

			fn DeleteSamplers(count: GLsizei, samplers: *const GLuint);
			require gl 3 . 3;
			require es 3 . 0;

			fn BindSampler(unit: GLuint, sampler: GLuint);
			require gl 3 . 3;
			require es 3 . 0;

			fn SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
			require gl 3 . 3;
			require es 3 . 0;

			fn VertexAttribDivisor(index: GLuint, divisor: GLuint);
			require gl 3 . 3;
			require es 3 . 0;

			// OpenGL 4.1
			fn ClearDepthf(depth: GLfloat);
			require gl 4 . 1;
			require es 2 . 0;

			fn DepthRangef(near: GLfloat, far: GLfloat);
			require gl 4 . 1;
			require es 2 . 0;

			fn ReleaseShaderCompiler();
			require gl 4 . 1;
			require es 2 . 0;

			fn GetProgramBinary(
				program: GLuint,
				buf_size: GLsizei,
				length: *mut GLsizei,
				binary_format: *mut GLenum,
				binary: *mut c_void,
			);
			require gl 4 . 1;
			require es 3 . 0;

			fn ProgramBinary(program: GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei);
			require gl 4 . 1;
			require es 3 . 0;

			// OpenGL 4.2
			fn TexStorage2D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
			require gl 4 . 2;
			require es 3 . 0;

			fn MemoryBarrier(barriers: GLbitfield);
			require gl 4 . 2;
			require es 3 . 1;

			// OpenGL 4.3
			fn DebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void);
			require gl 4 . 3;
			require es 3 . 2;
			require ext KHR_debug in gl;

			fn DebugMessageControl(
				source: GLenum,
				type_: GLenum,
				severity: GLenum,
				count: GLsizei,
				ids: *const GLuint,
				enabled: GLboolean,
			);
			require gl 4 . 3;
			require es 3 . 2;
			require ext KHR_debug in gl;

			fn DebugMessageCallbackKHR(callback: GLDEBUGPROC, user_param: *const c_void);
			require ext KHR_debug in es;

			fn DebugMessageControlKHR(
				source: GLenum,
				type_: GLenum,
				severity: GLenum,
				count: GLsizei,
				ids: *const GLuint,
				enabled: GLboolean,
			);
			require ext KHR_debug in es;

			fn DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
			require gl 4 . 3;
			require es 3 . 1;
			require ext ARB_compute_shader in gl;

			fn InvalidateFramebuffer(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum);
			require gl 4 . 3;
			require es 3 . 0;

			// OpenGL 4.4
			fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
			require gl 4 . 4;
			require ext ARB_buffer_storage;

			// OpenGL 4.5
			fn ClipControl(origin: GLenum, depth: GLenum);
			require gl 4 . 5;
			require ext ARB_clip_control;

			fn CreateBuffers(n: GLsizei, buffers: *mut GLuint);
			require gl 4 . 5;
			require ext ARB_direct_state_access;

			fn NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
			require gl 4 . 5;
			require ext ARB_direct_state_access;

			// Extensions
			fn DiscardFramebufferEXT(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum);
			require ext EXT_discard_framebuffer;

			fn EGLImageTargetTexture2DOES(target: GLenum, image: *const c_void);
			require ext OES_EGL_image;

			fn EGLImageTargetRenderbufferStorageOES(target: GLenum, image: *const c_void);
			require ext OES_EGL_image;

			fn MapBufferOES(target: GLenum, access: GLenum) -> *mut c_void;
			require ext OES_mapbuffer;

			fn UnmapBufferOES(target: GLenum) -> GLboolean;
			require ext OES_mapbuffer;

			fn BindVertexArrayOES(array: GLuint);
			require ext OES_vertex_array_object;

			fn DeleteVertexArraysOES(n: GLsizei, arrays: *const GLuint);
			require ext OES_vertex_array_object;

			fn GenVertexArraysOES(n: GLsizei, arrays: *mut GLuint);
			require ext OES_vertex_array_object;
		}
	};
}

pub(crate) use gl_manifest;
pub(crate) use normalize;
pub(crate) use opt_api;
pub(crate) use opt_version;
